//! # Registry configuration.
//!
//! Provides [`Config`], the settings of a [`Registry`](crate::Registry).
//!
//! Config is used in two ways:
//! 1. **Explicit contexts**: `Registry::with_config(config)`
//! 2. **Thread-local default**: every thread's default registry uses `Config::default()`
//!
//! ## Sentinel values
//! - `channel_capacity = 0` → no pre-sizing (maps grow on first use of each key)

/// Configuration of a registry context.
///
/// ## Field semantics
/// - `name`: label attached to the registry's log records
/// - `channel_capacity`: number of distinct keys (per kind) reserved up front
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Label used in `tracing` records emitted by the registry.
    pub name: &'static str,

    /// Number of distinct `(address, shape)` keys reserved up front.
    ///
    /// - `0` = no reservation
    /// - `n > 0` = the first `n` broadcast keys and the first `n` function keys
    ///   resolve without rehashing
    pub channel_capacity: usize,
}

impl Config {
    /// Returns a config with the given log label and default capacity.
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Returns the reservation as an `Option`.
    ///
    /// - `None` → no pre-sizing
    /// - `Some(n)` → reserve `n` keys
    #[inline]
    pub fn reserved_channels(&self) -> Option<usize> {
        if self.channel_capacity == 0 {
            None
        } else {
            Some(self.channel_capacity)
        }
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `name = "intercast"`
    /// - `channel_capacity = 16`
    fn default() -> Self {
        Self {
            name: "intercast",
            channel_capacity: 16,
        }
    }
}

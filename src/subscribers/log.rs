//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] records every event it receives through `tracing`.
//! Useful for development and examples; install a `tracing` subscriber to see output.
//!
//! ## Output format
//! ```text
//! INFO intercast: signal subscriber="audit" args=42
//! DEBUG intercast: connected subscriber="audit"
//! DEBUG intercast: disconnected subscriber="audit"
//! ```
//!
//! ## Example
//! ```no_run
//! # use std::pin::pin;
//! # use intercast::{LogWriter, Signal, Slot};
//! let sig = Signal::<u32>::new();
//! let log = pin!(Slot::new(LogWriter::new("audit")));
//! sig.connect(log.as_ref());
//! sig.emit(&42);
//! ```

use std::fmt::Debug;

use tracing::{debug, info};

use crate::Subscribe;

/// Logging subscriber for any `Debug` payload.
///
/// Enabled via the `logging` feature.
#[derive(Clone, Copy, Debug)]
pub struct LogWriter {
    label: &'static str,
}

impl LogWriter {
    /// Creates a writer tagging its records with `label`.
    pub const fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new("log")
    }
}

impl<A: ?Sized + Debug> Subscribe<A> for LogWriter {
    fn on_signal(&self, args: &A) {
        info!(subscriber = self.label, ?args, "signal");
    }

    fn on_connect(&self) {
        debug!(subscriber = self.label, "connected");
    }

    fn on_disconnect(&self) {
        debug!(subscriber = self.label, "disconnected");
    }

    fn name(&self) -> &'static str {
        self.label
    }
}

#[cfg(test)]
mod tests {
    use std::pin::pin;

    use super::*;
    use crate::{Signal, Slot};

    #[test]
    fn test_log_writer_receives_debug_payloads() {
        let sig = Signal::<str>::new();
        let slot = pin!(Slot::new(LogWriter::new("audit")));
        sig.connect(slot.as_ref());

        assert!(sig.emit("hello"));
        assert_eq!(Subscribe::<str>::name(slot.subscriber()), "audit");
    }
}

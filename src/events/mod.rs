//! Channels that fan events out to subscribers.
//!
//! - [`Signal`]: explicit, producer-owned channel.
//! - [`open`] / [`broadcast`] / [`close`]: implicit, address-keyed channels on the
//!   thread-local registry.
//! - [`channel`]: address-keyed function channels on the thread-local registry.

mod broadcast;
mod signal;

pub use broadcast::{broadcast, channel, close, open};
pub use signal::Signal;

//! Registry and function-channel machinery.
//!
//! - [`Registry`] resolves `(address, shape)` keys to broadcast lists and function channels.
//! - [`Channel`] is a single-function binding point with a write guard.
//! - [`Socket`] is the caller-side handle into a channel.
//! - [`Config`] configures a registry context.

mod channel;
mod config;
mod registry;
mod socket;

pub use channel::{Binding, Channel};
pub use config::Config;
pub use registry::Registry;
pub use socket::Socket;

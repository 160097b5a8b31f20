//! # Subscribers: receivers of emitted events.
//!
//! This module provides the [`Subscribe`] trait and the [`Slot`] that embeds a
//! subscriber into a channel's membership list.
//!
//! ## Architecture
//! ```text
//! Signal::emit(&args) / Registry::broadcast(addr, &args)
//!     │
//!     ├──► Slot #3 (newest) ──► subscriber.on_signal(&args)
//!     ├──► Slot #2          ──► subscriber.on_signal(&args)
//!     └──► Slot #1 (oldest) ──► subscriber.on_signal(&args)
//! ```
//!
//! ## Subscriber types
//! - **Closures** - any `Fn(&A)` is a subscriber.
//! - **Stateful subscribers** - structs implementing [`Subscribe`] with `Cell`/`RefCell` state.
//! - **Logging** - [`LogWriter`] (feature `logging`).

#[cfg(feature = "logging")]
mod log;
mod slot;
mod subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use slot::Slot;
pub use subscribe::Subscribe;

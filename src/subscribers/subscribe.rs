//! # Core subscriber trait
//!
//! `Subscribe<A>` is the capability a channel dispatches to: "receives an event
//! of shape `A`". Subscribers are driven synchronously, in the emitter's call
//! stack, by whichever channel their [`Slot`](crate::Slot) is joined to.
//!
//! ## Contract
//! - `on_signal` runs inline in `emit`/`broadcast`; it must not block.
//! - `on_connect` fires on every join, `on_disconnect` on every removal
//!   (explicit disconnect, move to another channel, channel teardown, slot drop).
//! - Handlers take `&self`; keep mutable state in `Cell`/`RefCell`.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use intercast::Subscribe;
//!
//! #[derive(Default)]
//! struct Last(Cell<i32>);
//!
//! impl Subscribe<i32> for Last {
//!     fn on_signal(&self, v: &i32) {
//!         self.0.set(*v);
//!     }
//!     fn name(&self) -> &'static str { "last" }
//! }
//! ```

/// Contract for event subscribers of shape `A`.
pub trait Subscribe<A: ?Sized> {
    /// Handles a single event.
    ///
    /// # Parameters
    /// - `args`: the event payload, shared by every subscriber of the emit.
    fn on_signal(&self, args: &A);

    /// Called after the subscriber joined a channel.
    fn on_connect(&self) {}

    /// Called after the subscriber left a channel.
    fn on_disconnect(&self) {}

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<A: ?Sized, F> Subscribe<A> for F
where
    F: Fn(&A),
{
    fn on_signal(&self, args: &A) {
        self(args)
    }
}

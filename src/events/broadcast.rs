//! # Implicit channels on the thread-local registry.
//!
//! Producers and consumers agree on a compile-time address and never see each
//! other: a subscriber `open`s address `ADDR`, a producer `broadcast`s to it.
//!
//! ## Architecture
//! ```text
//! Consumer:                                   Producer:
//!   open::<44, _, _>(slot) ──► thread registry ◄── broadcast::<44, i32>(&12)
//!                               (44, i32) list
//! ```
//!
//! ## Rules
//! - One list per `(ADDR, A)` per thread, created on first use.
//! - `open` refuses a slot that is joined anywhere (`LinkError::AlreadyJoined`).
//! - `close` is idempotent.
//! - Subscribers must be `'static`: the thread registry outlives every borrow.
//! - Use an explicit [`Registry`] when isolation from the thread default is needed.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use std::pin::pin;
//! use intercast::{broadcast, close, open, Slot, Subscribe};
//!
//! const TEMPERATURE: u32 = 44;
//!
//! #[derive(Default)]
//! struct Last(Cell<i32>);
//!
//! impl Subscribe<i32> for Last {
//!     fn on_signal(&self, v: &i32) {
//!         self.0.set(*v);
//!     }
//! }
//!
//! let slot = pin!(Slot::<i32, _>::new(Last::default()));
//!
//! open::<TEMPERATURE, _, _>(slot.as_ref()).unwrap();
//! assert!(broadcast::<TEMPERATURE, i32>(&21));
//! assert_eq!(slot.subscriber().0.get(), 21);
//!
//! close(&*slot);
//! assert!(!broadcast::<TEMPERATURE, i32>(&22));
//! ```

use std::pin::Pin;
use std::rc::Rc;

use crate::core::{Channel, Registry};
use crate::error::LinkError;
use crate::subscribers::Slot;
use crate::Address;

/// Joins `slot` to the implicit channel `(ADDR, A)` of this thread.
///
/// A subscriber borrowing locals could be leaked into the thread registry,
/// so it is rejected:
/// ```compile_fail
/// use std::cell::Cell;
/// use std::pin::pin;
/// use intercast::{open, Slot};
///
/// let seen = Cell::new(0);
/// let slot = pin!(Slot::<i32, _>::new(|v: &i32| seen.set(*v)));
/// open::<1, _, _>(slot.as_ref()).unwrap();
/// ```
pub fn open<const ADDR: Address, A: ?Sized + 'static, S: 'static>(
    slot: Pin<&Slot<A, S>>,
) -> Result<(), LinkError> {
    Registry::with_thread_local(|registry| registry.open(ADDR, slot))
}

/// Leaves whatever channel `slot` is joined to; no-op when free-standing.
pub fn close<A: ?Sized, S>(slot: &Slot<A, S>) {
    slot.disconnect();
}

/// Dispatches `args` to every subscriber of `(ADDR, A)` on this thread.
///
/// Returns `false` when nobody is listening.
pub fn broadcast<const ADDR: Address, A: ?Sized + 'static>(args: &A) -> bool {
    Registry::with_thread_local(|registry| registry.broadcast(ADDR, args))
}

/// Resolves the function channel `(ADDR, fn(A) -> R)` of this thread.
///
/// # Example
/// ```rust
/// use intercast::channel;
///
/// fn is_even(x: u32) -> bool { x % 2 == 0 }
///
/// channel::<1, u32, bool>().set_immutable(is_even).unwrap();
/// assert!(channel::<1, u32, bool>().call(4));
/// assert!(channel::<1, u32, bool>().set_mutable(|_| true).is_err());
/// ```
pub fn channel<const ADDR: Address, A: 'static, R: 'static>() -> Rc<Channel<A, R>> {
    Registry::with_thread_local(|registry| registry.channel::<A, R>(ADDR))
}

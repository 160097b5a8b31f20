//! # Explicit channel.
//!
//! [`Signal`] is a producer-owned fan-out point: the producer holds the signal,
//! subscribers attach to that specific instance, and `emit` calls every joined
//! subscriber inline.
//!
//! ## Architecture
//! ```text
//! Producer:                         Subscribers (many):
//!   sig.emit(&args) ───► Signal ───► Slot C (joined last)
//!                      (own list)  ├► Slot B
//!                                  └► Slot A (joined first)
//! ```
//!
//! ## Rules
//! - **Synchronous**: `emit()` returns after every subscriber ran.
//! - **Newest first**: dispatch order is reverse join order; do not rely on FIFO.
//! - **No allocation**: joining and leaving never allocate.
//! - **Empty is normal**: `emit()` returns `false` when nobody is listening.
//! - **Safe teardown**: dropping the signal disconnects every joined slot.
//! - **Bounded borrows**: `Signal<'a, A>` only accepts subscribers valid for `'a`,
//!   and `'a` must still be live when the signal is dropped.
//!
//! ## Threading
//! A signal is `!Send` and `!Sync`. Re-entrant membership changes from inside a
//! callback are limited to the current subscriber (or its successor) leaving.

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;
use std::pin::Pin;

use crate::error::LinkError;
use crate::link::List;
use crate::subscribers::Slot;

/// Fan-out channel owning one membership list.
///
/// ### Properties
/// - **Moving join**: [`Signal::connect`] re-homes a slot joined elsewhere.
/// - **Exclusive join**: [`Signal::try_connect`] refuses a slot joined elsewhere.
/// - **Cheap to create**: one allocation for the list sentinel, none afterwards.
///
/// A subscriber cannot outlive what it borrows while it stays reachable
/// from the signal, even if its slot is leaked:
/// ```compile_fail
/// use intercast::{Signal, Slot};
///
/// let sig = Signal::<u8>::new();
/// {
///     let data = vec![0xAA_u8; 64];
///     let slot = Box::pin(Slot::new(|_: &u8| assert_eq!(data[0], 0xAA)));
///     sig.connect(slot.as_ref());
///     std::mem::forget(slot);
/// }
/// sig.emit(&0);
/// ```
pub struct Signal<'a, A: ?Sized> {
    slots: List<A>,
    // Invariant in `'a`: it cannot be shortened to admit shorter-lived subscribers.
    _borrows: PhantomData<Cell<&'a ()>>,
}

impl<'a, A: ?Sized> Signal<'a, A> {
    /// Creates a signal with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: List::new(),
            _borrows: PhantomData,
        }
    }

    /// Joins `slot` at the front of this signal.
    ///
    /// If the slot is already joined (here or elsewhere) it is unlinked first,
    /// firing its disconnect hook, then linked here, firing its connect hook.
    pub fn connect<S: 'a>(&self, slot: Pin<&Slot<A, S>>) {
        // Pinned slots unlink themselves on drop; leaked ones stay valid for `'a`.
        unsafe { self.slots.push_front(slot.link_ptr()) };
    }

    /// Joins `slot` only if it is not connected anywhere.
    ///
    /// # Example
    /// ```
    /// use std::pin::pin;
    /// use intercast::{LinkError, Signal, Slot};
    ///
    /// let a = Signal::<u8>::new();
    /// let b = Signal::<u8>::new();
    /// let slot = pin!(Slot::new(|_: &u8| {}));
    ///
    /// a.connect(slot.as_ref());
    /// assert_eq!(b.try_connect(slot.as_ref()), Err(LinkError::AlreadyJoined));
    /// assert_eq!(a.len(), 1);
    /// ```
    pub fn try_connect<S: 'a>(&self, slot: Pin<&Slot<A, S>>) -> Result<(), LinkError> {
        if slot.is_connected() {
            return Err(LinkError::AlreadyJoined);
        }
        self.connect(slot);
        Ok(())
    }

    /// Dispatches `args` to every joined subscriber, newest first.
    ///
    /// Returns `true` if at least one subscriber was notified.
    pub fn emit(&self, args: &A) -> bool {
        self.slots.emit(args)
    }

    /// Disconnects every joined subscriber.
    pub fn disconnect_all(&self) {
        self.slots.clear();
    }

    /// Returns `true` when no subscriber is joined.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Counts joined subscribers (walks the list).
    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

impl<A: ?Sized> Default for Signal<'_, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> Drop for Signal<'_, A> {
    fn drop(&mut self) {
        // Disconnect hooks may still touch borrows of `'a`.
        self.slots.clear();
    }
}

impl<A: ?Sized> fmt::Debug for Signal<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.len())
            .finish()
    }
}

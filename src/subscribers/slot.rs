//! # Pinned subscriber holder.
//!
//! [`Slot`] embeds the membership node next to a [`Subscribe`] implementation.
//! It is the only thing a channel ever points at.
//!
//! ## Lifecycle
//! ```text
//! Slot::new(sub) ──► pin!(..) ──► Signal::connect / Registry::open
//!                                       │
//!                 disconnect() ◄────────┤ (idempotent)
//!                 drop        ◄─────────┘ (unlinks first)
//! ```
//!
//! ## Rules
//! - A slot must be pinned to join a channel; it never moves while linked.
//! - A slot is joined to at most one channel at a time.
//! - Dropping a slot unlinks it, so a channel can never dispatch to freed storage.
//! - A subscriber may only borrow data that outlives the channel it joins
//!   (`'static` for the thread-local registry), so a leaked slot stays valid.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use std::pin::pin;
//! use intercast::{Signal, Slot};
//!
//! let seen = Cell::new(0);
//! let sig = Signal::<i32>::new();
//! let slot = pin!(Slot::new(|v: &i32| seen.set(*v)));
//!
//! sig.connect(slot.as_ref());
//! assert!(slot.is_connected());
//! assert!(sig.emit(&7));
//! assert_eq!(seen.get(), 7);
//!
//! slot.disconnect();
//! assert!(!sig.emit(&8));
//! ```

use std::fmt;
use std::pin::Pin;
use std::ptr::NonNull;

use crate::error::LinkError;
use crate::link::{Link, Vtable};
use crate::subscribers::Subscribe;
use crate::Address;

/// A subscriber together with its intrusive membership node.
///
/// `#[repr(C)]` keeps `link` at offset zero so a node pointer can be turned
/// back into its slot.
#[repr(C)]
pub struct Slot<A: ?Sized, S> {
    link: Link<A>,
    subscriber: S,
}

impl<A: ?Sized, S: Subscribe<A>> Slot<A, S> {
    /// Creates a free-standing (unlinked) slot.
    pub fn new(subscriber: S) -> Self {
        Self {
            link: Link::member(Vtable {
                signal: Self::signal_shim,
                connected: Self::connected_shim,
                disconnected: Self::disconnected_shim,
            }),
            subscriber,
        }
    }

    unsafe fn signal_shim(link: NonNull<Link<A>>, args: &A) {
        let slot = unsafe { link.cast::<Self>().as_ref() };
        slot.subscriber.on_signal(args);
    }

    unsafe fn connected_shim(link: NonNull<Link<A>>) {
        let slot = unsafe { link.cast::<Self>().as_ref() };
        slot.subscriber.on_connect();
    }

    unsafe fn disconnected_shim(link: NonNull<Link<A>>) {
        let slot = unsafe { link.cast::<Self>().as_ref() };
        slot.subscriber.on_disconnect();
    }
}

impl<A: ?Sized, S> Slot<A, S> {
    /// Returns the wrapped subscriber.
    #[inline]
    pub fn subscriber(&self) -> &S {
        &self.subscriber
    }

    /// Returns `true` while the slot is joined to a channel.
    #[inline]
    pub fn is_connected(&self) -> bool {
        self.link.is_linked()
    }

    /// Leaves the current channel; no-op when not connected.
    pub fn disconnect(&self) {
        // A linked slot is pinned, so its neighbors still point at it.
        unsafe { Link::<A>::unlink(NonNull::from(self).cast()) };
    }

    /// Node pointer carrying provenance over the whole slot.
    pub(crate) fn link_ptr(self: Pin<&Self>) -> NonNull<Link<A>> {
        NonNull::from(self.get_ref()).cast()
    }
}

impl<A: ?Sized + 'static, S: 'static> Slot<A, S> {
    /// Joins the implicit channel `ADDR` of the thread-local registry.
    ///
    /// Fails with [`LinkError::AlreadyJoined`] if the slot is connected anywhere.
    /// The thread registry lives until thread exit, so `S` must not borrow.
    pub fn open<const ADDR: Address>(self: Pin<&Self>) -> Result<(), LinkError> {
        crate::events::open::<ADDR, A, S>(self)
    }
}

impl<A: ?Sized, S> Drop for Slot<A, S> {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl<A: ?Sized, S: fmt::Debug> fmt::Debug for Slot<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("connected", &self.is_connected())
            .field("subscriber", &self.subscriber)
            .finish()
    }
}

//! # Membership node.
//!
//! A [`Link`] is the intrusive half of a subscription: it lives inside the
//! subscriber's storage and is threaded into a channel's list by pointer.
//!
//! ## Rules
//! - A node is either **unlinked** (`prev == next == None`) or part of exactly one list.
//! - `unlink` is O(1), never fails, and is a no-op on an unlinked node.
//! - Nodes never move while linked: callers must hold them behind `Pin`.
//! - The list sentinel is a `Link` without a vtable; it is never dispatched to.

use std::cell::Cell;
use std::marker::PhantomPinned;
use std::ptr::NonNull;

/// Type-erased entry points back into the subscriber that embeds a node.
///
/// Each function receives the node pointer and recovers its owner from it.
pub(crate) struct Vtable<A: ?Sized> {
    pub(crate) signal: unsafe fn(NonNull<Link<A>>, &A),
    pub(crate) connected: unsafe fn(NonNull<Link<A>>),
    pub(crate) disconnected: unsafe fn(NonNull<Link<A>>),
}

impl<A: ?Sized> Clone for Vtable<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: ?Sized> Copy for Vtable<A> {}

/// Intrusive doubly-linked node.
pub(crate) struct Link<A: ?Sized> {
    prev: Cell<Option<NonNull<Link<A>>>>,
    next: Cell<Option<NonNull<Link<A>>>>,
    vtable: Option<Vtable<A>>,
    _pinned: PhantomPinned,
}

impl<A: ?Sized> Link<A> {
    /// Creates an unlinked member node dispatching through `vtable`.
    pub(crate) fn member(vtable: Vtable<A>) -> Self {
        Self {
            prev: Cell::new(None),
            next: Cell::new(None),
            vtable: Some(vtable),
            _pinned: PhantomPinned,
        }
    }

    /// Creates a self-referential sentinel (an empty circular list).
    pub(crate) fn sentinel() -> std::pin::Pin<Box<Self>> {
        let head = Box::pin(Self {
            prev: Cell::new(None),
            next: Cell::new(None),
            vtable: None,
            _pinned: PhantomPinned,
        });
        let ptr = NonNull::from(&*head);
        head.prev.set(Some(ptr));
        head.next.set(Some(ptr));
        head
    }

    #[inline]
    pub(crate) fn is_linked(&self) -> bool {
        self.next.get().is_some()
    }

    #[inline]
    pub(crate) fn next(&self) -> Option<NonNull<Link<A>>> {
        self.next.get()
    }

    #[inline]
    pub(crate) fn is_sentinel(&self) -> bool {
        self.vtable.is_none()
    }

    /// Splices `node` right after `head` and fires its connect hook.
    ///
    /// A node that is already linked is left where it is: a disconnect hook
    /// may have re-joined it while it was being moved.
    ///
    /// # Safety
    /// `head` must be a live, linked node of a list and `node` must be a
    /// pinned member node that outlives its membership.
    pub(crate) unsafe fn insert_after(head: NonNull<Link<A>>, node: NonNull<Link<A>>) {
        let (h, n) = unsafe { (head.as_ref(), node.as_ref()) };
        if n.is_linked() {
            return;
        }

        let Some(first) = h.next.get() else {
            return;
        };
        n.prev.set(Some(head));
        n.next.set(Some(first));
        unsafe { first.as_ref() }.prev.set(Some(node));
        h.next.set(Some(node));

        if let Some(vt) = n.vtable {
            unsafe { (vt.connected)(node) };
        }
    }

    /// Removes `node` from whatever list holds it.
    ///
    /// Returns `false` when the node was already unlinked. The disconnect hook
    /// fires only on an actual removal.
    ///
    /// # Safety
    /// `node` must point at a live node, derived from a pointer to its owner.
    pub(crate) unsafe fn unlink(node: NonNull<Link<A>>) -> bool {
        let link = unsafe { node.as_ref() };
        let (Some(prev), Some(next)) = (link.prev.take(), link.next.take()) else {
            return false;
        };
        // Neighbors are alive: both subscribers and lists unlink on drop.
        unsafe {
            prev.as_ref().next.set(Some(next));
            next.as_ref().prev.set(Some(prev));
        }

        if let Some(vt) = link.vtable {
            unsafe { (vt.disconnected)(node) };
        }
        true
    }

    /// Delivers `args` to the subscriber owning this node.
    ///
    /// # Safety
    /// `node` must be a live member node (not a sentinel).
    #[inline]
    pub(crate) unsafe fn dispatch(node: NonNull<Link<A>>, args: &A) {
        if let Some(vt) = unsafe { node.as_ref() }.vtable {
            unsafe { (vt.signal)(node, args) };
        }
    }
}

//! # Membership list.
//!
//! [`List`] is a circular, doubly-linked, intrusive list of [`Link`]s. It does
//! not own its members: each member lives inside a pinned subscriber.
//!
//! ## Layout
//! ```text
//!        ┌──────────────────────────────────────────────┐
//!        ▼                                              │
//!   [sentinel] ──next──► [newest] ──► ... ──► [oldest] ─┘
//!   (boxed, pinned)
//! ```
//!
//! ## Rules
//! - `push_front` and removal are O(1) and never allocate.
//! - The list is empty iff the sentinel points at itself.
//! - Iteration is newest-first.
//! - Dropping the list unlinks every remaining member (disconnect hooks fire).

use std::pin::Pin;
use std::ptr::NonNull;

use super::node::Link;

pub(crate) struct List<A: ?Sized> {
    head: Pin<Box<Link<A>>>,
}

impl<A: ?Sized> List<A> {
    /// Creates an empty list (allocates the sentinel once).
    pub(crate) fn new() -> Self {
        Self {
            head: Link::sentinel(),
        }
    }

    #[inline]
    fn head_ptr(&self) -> NonNull<Link<A>> {
        NonNull::from(&*self.head)
    }

    /// Links `node` at the front, moving it out of any other list first.
    ///
    /// # Safety
    /// `node` must be a member node of a pinned owner that unlinks it before
    /// being dropped, and must be derived from a pointer to that owner.
    pub(crate) unsafe fn push_front(&self, node: NonNull<Link<A>>) {
        unsafe {
            Link::unlink(node);
            Link::insert_after(self.head_ptr(), node);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.next() == Some(self.head_ptr())
    }

    pub(crate) fn len(&self) -> usize {
        let head = self.head_ptr();
        let mut count = 0;
        let mut cur = self.head.next();
        while let Some(node) = cur {
            if node == head {
                break;
            }
            count += 1;
            cur = unsafe { node.as_ref() }.next();
        }
        count
    }

    /// Dispatches `args` to every member, newest first.
    ///
    /// Returns `true` if at least one member was visited.
    ///
    /// The walk tolerates the current member unlinking itself (or its
    /// successor) from inside its callback; any other concurrent change of
    /// membership is outside the contract.
    pub(crate) fn emit(&self, args: &A) -> bool {
        let head = self.head_ptr();
        let mut delivered = false;
        let mut cur = self.head.next();

        while let Some(node) = cur {
            if node == head {
                break;
            }
            let link = unsafe { node.as_ref() };
            if link.is_sentinel() {
                break;
            }
            let saved = link.next();
            delivered = true;

            // Members are alive while linked: their owners unlink on drop.
            unsafe { Link::dispatch(node, args) };

            cur = if link.is_linked() { link.next() } else { saved };
        }
        delivered
    }

    /// Unlinks every member.
    pub(crate) fn clear(&self) {
        let head = self.head_ptr();
        while let Some(first) = self.head.next() {
            if first == head {
                break;
            }
            unsafe { Link::unlink(first) };
        }
    }
}

impl<A: ?Sized> Default for List<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> Drop for List<A> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::pin::pin;

    use super::*;
    use crate::Slot;

    fn join<S>(list: &List<u8>, slot: Pin<&Slot<u8, S>>) {
        unsafe { list.push_front(slot.link_ptr()) };
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = List::<u8>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(!list.emit(&1));
    }

    #[test]
    fn test_push_front_and_unlink() {
        let seen = RefCell::new(Vec::new());
        let list = List::<u8>::new();
        let a = pin!(Slot::<u8, _>::new(|v: &u8| seen.borrow_mut().push(('a', *v))));
        let b = pin!(Slot::<u8, _>::new(|v: &u8| seen.borrow_mut().push(('b', *v))));

        join(&list, a.as_ref());
        join(&list, b.as_ref());
        assert_eq!(list.len(), 2);

        assert!(list.emit(&1));
        assert_eq!(*seen.borrow(), vec![('b', 1), ('a', 1)]);

        assert!(unsafe { Link::unlink(a.as_ref().link_ptr()) });
        assert!(!unsafe { Link::unlink(a.as_ref().link_ptr()) });
        assert_eq!(list.len(), 1);

        b.disconnect();
        assert!(list.is_empty());
    }

    #[test]
    fn test_push_front_moves_between_lists() {
        let first = List::<u8>::new();
        let second = List::<u8>::new();
        let a = pin!(Slot::<u8, _>::new(|_: &u8| {}));

        join(&first, a.as_ref());
        join(&second, a.as_ref());
        assert!(first.is_empty());
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_clear_unlinks_every_member() {
        let list = List::<u8>::new();
        let a = pin!(Slot::<u8, _>::new(|_: &u8| {}));
        let b = pin!(Slot::<u8, _>::new(|_: &u8| {}));
        join(&list, a.as_ref());
        join(&list, b.as_ref());

        list.clear();
        assert!(list.is_empty());
        assert!(!a.is_connected());
        assert!(!b.is_connected());
    }

    #[test]
    fn test_drop_of_member_unlinks_it() {
        let list = List::<u8>::new();
        let keep = pin!(Slot::<u8, _>::new(|_: &u8| {}));
        join(&list, keep.as_ref());
        {
            let gone = pin!(Slot::<u8, _>::new(|_: &u8| {}));
            join(&list, gone.as_ref());
            assert_eq!(list.len(), 2);
        }
        assert_eq!(list.len(), 1);
        assert!(keep.is_connected());
    }
}

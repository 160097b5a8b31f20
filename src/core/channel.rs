//! # Function channel.
//!
//! A [`Channel`] is a single-destination binding point: it holds at most one
//! function of call shape `fn(A) -> R`, optionally frozen against rewrites.
//!
//! ## State machine
//! ```text
//!                set_mutable(f)                 set_immutable(f)
//!   Unbound ─────────────────────► Mutable ─────────────────────► Immutable
//!      │  ◄───────── erase() ─────── │ ▲                             │
//!      │                             └─┘ set_mutable(f)              │ any write
//!      └────────── set_immutable(f) ───────────────────────────────► │ rejected
//! ```
//!
//! ## Rules
//! - `Unbound`/`Mutable` accept both `set_mutable` and `set_immutable`.
//! - `Immutable` rejects `set_mutable`, `set_immutable` and `erase`; state is unchanged.
//! - Calling an unbound channel returns `R::default()`.

use std::cell::Cell;
use std::fmt;

use tracing::{debug, trace};

use crate::error::LinkError;

/// Binding state of a function channel.
pub enum Binding<A, R> {
    /// Nothing bound; calls return `R::default()`.
    Unbound,
    /// Bound and rebindable (last writer wins).
    Mutable(fn(A) -> R),
    /// Bound and frozen.
    Immutable(fn(A) -> R),
}

impl<A, R> Binding<A, R> {
    /// Returns the bound function, if any.
    #[inline]
    pub fn function(&self) -> Option<fn(A) -> R> {
        match *self {
            Binding::Unbound => None,
            Binding::Mutable(f) | Binding::Immutable(f) => Some(f),
        }
    }

    fn as_label(&self) -> &'static str {
        match self {
            Binding::Unbound => "unbound",
            Binding::Mutable(_) => "mutable",
            Binding::Immutable(_) => "immutable",
        }
    }
}

impl<A, R> Clone for Binding<A, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, R> Copy for Binding<A, R> {}

impl<A, R> PartialEq for Binding<A, R> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Binding::Unbound, Binding::Unbound) => true,
            (Binding::Mutable(a), Binding::Mutable(b))
            | (Binding::Immutable(a), Binding::Immutable(b)) => *a as usize == *b as usize,
            _ => false,
        }
    }
}

impl<A, R> fmt::Debug for Binding<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Single-function slot with a write guard.
///
/// Obtain shared instances from a [`Registry`](crate::Registry); a
/// [`Socket`](crate::Socket) attached to the same key observes every rebind.
///
/// # Example
/// ```
/// use intercast::{Channel, LinkError};
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn triple(x: i32) -> i32 { x * 3 }
///
/// let ch = Channel::<i32, i32>::new();
/// assert_eq!(ch.call(5), 0);
///
/// ch.set_immutable(double).unwrap();
/// assert_eq!(ch.set_mutable(triple), Err(LinkError::ImmutableWriteRejected));
/// assert_eq!(ch.call(5), 10);
/// ```
pub struct Channel<A, R> {
    binding: Cell<Binding<A, R>>,
}

impl<A, R> Channel<A, R> {
    /// Creates an unbound, mutable channel.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            binding: Cell::new(Binding::Unbound),
        }
    }

    /// Binds `f`, keeping the channel rebindable.
    ///
    /// Fails with [`LinkError::ImmutableWriteRejected`] when frozen.
    pub fn set_mutable(&self, f: fn(A) -> R) -> Result<(), LinkError> {
        self.write(Binding::Mutable(f))
    }

    /// Binds `f` and freezes the channel.
    ///
    /// Fails with [`LinkError::ImmutableWriteRejected`] when already frozen.
    pub fn set_immutable(&self, f: fn(A) -> R) -> Result<(), LinkError> {
        self.write(Binding::Immutable(f))
    }

    /// Unbinds the channel; only allowed while mutable.
    pub fn erase(&self) -> Result<(), LinkError> {
        self.write(Binding::Unbound)
    }

    fn write(&self, next: Binding<A, R>) -> Result<(), LinkError> {
        let current = self.binding.get();
        if let Binding::Immutable(_) = current {
            debug!(attempted = next.as_label(), "write on immutable channel rejected");
            return Err(LinkError::ImmutableWriteRejected);
        }
        trace!(from = current.as_label(), to = next.as_label(), "channel rebound");
        self.binding.set(next);
        Ok(())
    }

    /// Returns `true` if a function is bound.
    #[inline]
    pub fn exists(&self) -> bool {
        self.get().is_some()
    }

    /// Returns `false` once the channel has been frozen.
    #[inline]
    pub fn is_mutable(&self) -> bool {
        !matches!(self.binding.get(), Binding::Immutable(_))
    }

    /// Returns the current binding state.
    #[inline]
    pub fn binding(&self) -> Binding<A, R> {
        self.binding.get()
    }

    /// Returns the bound function, if any.
    #[inline]
    pub fn get(&self) -> Option<fn(A) -> R> {
        self.binding.get().function()
    }
}

impl<A, R: Default> Channel<A, R> {
    /// Invokes the bound function, or returns `R::default()` when unbound.
    #[inline]
    pub fn call(&self, args: A) -> R {
        match self.get() {
            Some(f) => f(args),
            None => R::default(),
        }
    }
}

impl<A, R> Default for Channel<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R> fmt::Debug for Channel<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("binding", &self.binding.get())
            .finish()
    }
}

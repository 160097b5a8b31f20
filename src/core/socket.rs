//! # Caller-side handle to a function channel.
//!
//! A [`Socket`] remembers *which* channel it is attached to, not which
//! function is bound there, so rebinds through the registry are observed on
//! the next call without re-attaching.
//!
//! ## Rules
//! - A detached socket, or one attached to an unbound channel, returns `R::default()`.
//! - `exists()` is `true` only when attached **and** the channel is bound.
//! - Attaching never allocates beyond the registry's lazy entry creation.

use std::fmt;
use std::rc::Rc;

use crate::core::channel::Channel;
use crate::core::registry::Registry;
use crate::Address;

/// Indirect callable pointing at a registry function channel.
///
/// # Example
/// ```
/// use intercast::{Registry, Socket};
///
/// fn square(x: u32) -> u32 { x * x }
///
/// let registry = Registry::new();
/// let mut socket = Socket::<u32, u32>::new();
/// assert_eq!(socket.call(4), 0);
///
/// socket.attach(&registry, 12);
/// assert!(!socket.exists());
///
/// registry.channel::<u32, u32>(12).set_mutable(square).unwrap();
/// assert_eq!(socket.call(4), 16);
/// ```
pub struct Socket<A, R> {
    channel: Option<Rc<Channel<A, R>>>,
}

impl<A, R> Socket<A, R> {
    /// Creates a detached socket.
    #[must_use]
    pub const fn new() -> Self {
        Self { channel: None }
    }

    /// Detaches the socket; subsequent calls return `R::default()`.
    pub fn detach(&mut self) {
        self.channel = None;
    }

    /// Returns `true` when attached to a channel.
    pub fn is_attached(&self) -> bool {
        self.channel.is_some()
    }

    /// Returns `true` when attached to a channel that has a function bound.
    pub fn exists(&self) -> bool {
        self.channel.as_deref().is_some_and(Channel::exists)
    }
}

impl<A: 'static, R: 'static> Socket<A, R> {
    /// Creates a socket attached to `(addr, fn(A) -> R)` in `registry`.
    #[must_use]
    pub fn attached(registry: &Registry<'_>, addr: Address) -> Self {
        Self {
            channel: Some(registry.channel::<A, R>(addr)),
        }
    }

    /// Attaches to `(addr, fn(A) -> R)` in `registry`, replacing any previous attachment.
    pub fn attach(&mut self, registry: &Registry<'_>, addr: Address) {
        self.channel = Some(registry.channel::<A, R>(addr));
    }

    /// Attaches to `(ADDR, fn(A) -> R)` in the thread-local registry.
    pub fn attach_to<const ADDR: Address>(&mut self) {
        self.channel = Some(crate::events::channel::<ADDR, A, R>());
    }
}

impl<A, R: Default> Socket<A, R> {
    /// Invokes whatever the channel currently holds.
    #[inline]
    pub fn call(&self, args: A) -> R {
        match &self.channel {
            Some(channel) => channel.call(args),
            None => R::default(),
        }
    }
}

impl<A, R> Default for Socket<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R> Clone for Socket<A, R> {
    fn clone(&self) -> Self {
        Self {
            channel: self.channel.clone(),
        }
    }
}

impl<A, R> fmt::Debug for Socket<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Socket")
            .field("channel", &self.channel.as_deref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinkError;

    fn add(args: (i32, i32)) -> i32 {
        args.0 + args.1
    }

    fn sub(args: (i32, i32)) -> i32 {
        args.0 - args.1
    }

    #[test]
    fn test_detached_socket_returns_default() {
        let int = Socket::<(), i32>::new();
        let flag = Socket::<u8, bool>::default();
        assert_eq!(int.call(()), 0);
        assert!(!flag.call(1));
        assert!(!int.is_attached());
        assert!(!int.exists());
    }

    #[test]
    fn test_socket_observes_rebind_without_reattach() {
        let registry = Registry::new();
        let socket = Socket::<(i32, i32), i32>::attached(&registry, 1);
        assert_eq!(socket.call((5, 3)), 0);

        let ch = registry.channel::<(i32, i32), i32>(1);
        ch.set_mutable(add).unwrap();
        assert!(socket.exists());
        assert_eq!(socket.call((5, 3)), 8);

        ch.set_mutable(sub).unwrap();
        assert_eq!(socket.call((5, 3)), 2);

        ch.erase().unwrap();
        assert!(!socket.exists());
        assert_eq!(socket.call((5, 3)), 0);
    }

    #[test]
    fn test_frozen_binding_is_authoritative_for_sockets() {
        let registry = Registry::new();
        let socket = Socket::<(i32, i32), i32>::attached(&registry, 2);
        let ch = registry.channel::<(i32, i32), i32>(2);

        ch.set_immutable(add).unwrap();
        assert_eq!(ch.set_mutable(sub), Err(LinkError::ImmutableWriteRejected));
        assert_eq!(socket.call((2, 2)), 4);
    }

    #[test]
    fn test_detach_restores_default() {
        let registry = Registry::new();
        registry.channel::<(i32, i32), i32>(3).set_mutable(add).unwrap();

        let mut socket = Socket::<(i32, i32), i32>::new();
        socket.attach(&registry, 3);
        assert_eq!(socket.call((1, 1)), 2);

        socket.detach();
        assert!(!socket.exists());
        assert_eq!(socket.call((1, 1)), 0);
        assert!(registry.channel::<(i32, i32), i32>(3).exists());
    }

    #[test]
    fn test_attach_to_thread_local_registry() {
        crate::channel::<77, (i32, i32), i32>().set_mutable(sub).unwrap();
        let mut socket = Socket::<(i32, i32), i32>::new();
        socket.attach_to::<77>();
        assert_eq!(socket.call((10, 4)), 6);
    }
}

//! # Address-keyed registry.
//!
//! [`Registry`] resolves an `(address, shape)` key to a singleton entry:
//! - a broadcast list for implicit channels (`open` / `broadcast`),
//! - a [`Channel`] for function channels (`channel` / [`Socket`](crate::Socket)).
//!
//! ## Architecture
//! ```text
//! open(44, slot) ─────┐                     ┌──► List<i32>  (44, i32)
//! broadcast(44, &v) ──┼──► Registry.lists ──┼──► List<str>  (44, str)
//!                     │                     └──► List<u8>   (7,  u8)
//! channel(3) ─────────┴──► Registry.channels ──► Channel<i32, bool> (3, fn(i32) -> bool)
//! ```
//!
//! ## Rules
//! - Entries are created lazily, empty/unbound, on first resolution.
//! - Entries live as long as the registry; they are never removed.
//! - The same address with a different shape is a different entry.
//! - Every thread owns one default registry (see [`Registry::with_thread_local`]);
//!   explicit instances never share state with it or with each other.
//! - Registries are `!Send`/`!Sync`; all operations are synchronous.
//! - `Registry<'a>` only admits subscribers valid for `'a`; the thread-local
//!   default is `Registry<'static>`.

use std::any::{Any, TypeId};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::pin::Pin;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::core::channel::Channel;
use crate::core::config::Config;
use crate::error::LinkError;
use crate::link::List;
use crate::subscribers::Slot;
use crate::Address;

type Key = (Address, TypeId);

thread_local! {
    static THREAD_REGISTRY: Registry<'static> = Registry::with_config(Config::named("thread"));
}

/// Registry of implicit broadcast channels and function channels.
///
/// # Example
/// ```
/// use std::cell::Cell;
/// use std::pin::pin;
/// use intercast::{Registry, Slot};
///
/// let seen = Cell::new(0);
/// let registry = Registry::new();
/// let slot = pin!(Slot::<i32, _>::new(|v: &i32| seen.set(*v)));
///
/// registry.open(44, slot.as_ref()).unwrap();
/// assert!(registry.broadcast(44, &12));
/// assert_eq!(seen.get(), 12);
/// ```
///
/// Subscribers borrowing shorter-lived data are rejected:
/// ```compile_fail
/// use std::cell::Cell;
/// use std::pin::pin;
/// use intercast::{Registry, Slot};
///
/// let registry = Registry::new();
/// let seen = Cell::new(0);
/// let slot = pin!(Slot::<i32, _>::new(|v: &i32| seen.set(*v)));
/// registry.open(44, slot.as_ref()).unwrap();
/// ```
pub struct Registry<'a> {
    config: Config,
    lists: RefCell<HashMap<Key, Rc<dyn Any>>>,
    channels: RefCell<HashMap<Key, Rc<dyn Any>>>,
    _borrows: PhantomData<Cell<&'a ()>>,
}

impl Registry<'static> {
    /// Runs `f` with the calling thread's default registry.
    ///
    /// Re-entrant: callbacks running inside `f` may use it again.
    pub fn with_thread_local<T>(f: impl FnOnce(&Registry<'static>) -> T) -> T {
        THREAD_REGISTRY.with(f)
    }
}

impl<'a> Registry<'a> {
    /// Creates a registry with [`Config::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a registry with the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        let reserved = config.reserved_channels().unwrap_or(0);
        Self {
            lists: RefCell::new(HashMap::with_capacity(reserved)),
            channels: RefCell::new(HashMap::with_capacity(reserved)),
            config,
            _borrows: PhantomData,
        }
    }

    /// Returns the registry configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolves the broadcast list of `(addr, A)`, creating it on first use.
    fn list<A: ?Sized + 'static>(&self, addr: Address) -> Rc<List<A>> {
        let entry = Rc::clone(
            self.lists
                .borrow_mut()
                .entry((addr, TypeId::of::<A>()))
                .or_insert_with(|| {
                    trace!(
                        registry = self.config.name,
                        addr,
                        shape = std::any::type_name::<A>(),
                        "broadcast channel created"
                    );
                    Rc::new(List::<A>::new()) as Rc<dyn Any>
                }),
        );
        match entry.downcast::<List<A>>() {
            Ok(list) => list,
            Err(_) => unreachable!("entry keyed by TypeId of its shape"),
        }
    }

    /// Joins `slot` to the implicit channel `(addr, A)`.
    ///
    /// Fails with [`LinkError::AlreadyJoined`] if the slot is connected to any
    /// channel; its existing membership is left untouched.
    pub fn open<A: ?Sized + 'static, S: 'a>(
        &self,
        addr: Address,
        slot: Pin<&Slot<A, S>>,
    ) -> Result<(), LinkError> {
        if slot.is_connected() {
            debug!(registry = self.config.name, addr, "open rejected: slot already joined");
            return Err(LinkError::AlreadyJoined);
        }
        // Pinned slots unlink themselves on drop; leaked ones stay valid for `'a`.
        unsafe { self.list::<A>(addr).push_front(slot.link_ptr()) };
        Ok(())
    }

    /// Leaves whatever channel `slot` is joined to; no-op when free-standing.
    pub fn close<A: ?Sized, S>(&self, slot: &Slot<A, S>) {
        slot.disconnect();
    }

    /// Dispatches `args` to every subscriber of `(addr, A)`, newest first.
    ///
    /// Returns `false` when nobody is listening.
    pub fn broadcast<A: ?Sized + 'static>(&self, addr: Address, args: &A) -> bool {
        // The map borrow ends here, so callbacks may open other keys.
        let list = self.list::<A>(addr);
        list.emit(args)
    }

    /// Counts subscribers of `(addr, A)` without creating the entry.
    pub fn subscriber_count<A: ?Sized + 'static>(&self, addr: Address) -> usize {
        self.lists
            .borrow()
            .get(&(addr, TypeId::of::<A>()))
            .and_then(|entry| entry.downcast_ref::<List<A>>())
            .map_or(0, List::len)
    }

    /// Resolves the function channel `(addr, fn(A) -> R)`, creating it unbound on first use.
    pub fn channel<A: 'static, R: 'static>(&self, addr: Address) -> Rc<Channel<A, R>> {
        let entry = Rc::clone(
            self.channels
                .borrow_mut()
                .entry((addr, TypeId::of::<fn(A) -> R>()))
                .or_insert_with(|| {
                    trace!(
                        registry = self.config.name,
                        addr,
                        shape = std::any::type_name::<fn(A) -> R>(),
                        "function channel created"
                    );
                    Rc::new(Channel::<A, R>::new()) as Rc<dyn Any>
                }),
        );
        match entry.downcast::<Channel<A, R>>() {
            Ok(channel) => channel,
            Err(_) => unreachable!("entry keyed by TypeId of its shape"),
        }
    }

    /// Number of broadcast and function entries created so far.
    pub fn len(&self) -> usize {
        self.lists.borrow().len() + self.channels.borrow().len()
    }

    /// Returns `true` if no entry has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Registry<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Registry<'_> {
    fn drop(&mut self) {
        debug!(
            registry = self.config.name,
            broadcast = self.lists.get_mut().len(),
            functions = self.channels.get_mut().len(),
            "registry dropped"
        );
    }
}

impl fmt::Debug for Registry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.config.name)
            .field("broadcast", &self.lists.borrow().len())
            .field("functions", &self.channels.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::pin::pin;

    use super::*;
    use crate::{Signal, Subscribe};

    type ProbeSlot = Slot<i32, Probe>;

    #[derive(Default)]
    struct Probe {
        last: Cell<i32>,
        connected: Cell<bool>,
    }

    impl Subscribe<i32> for Probe {
        fn on_signal(&self, v: &i32) {
            self.last.set(*v);
        }

        fn on_connect(&self) {
            self.connected.set(true);
        }

        fn on_disconnect(&self) {
            self.connected.set(false);
        }
    }

    #[test]
    fn test_broadcast_scenario_with_explicit_signal() {
        let registry = Registry::new();
        let s1 = pin!(ProbeSlot::new(Probe::default()));
        let s2 = pin!(ProbeSlot::new(Probe::default()));

        assert_eq!(registry.open(44, s1.as_ref()), Ok(()));
        assert!(s1.subscriber().connected.get());
        registry.broadcast(44, &12);
        assert_eq!(s1.subscriber().last.get(), 12);
        assert_eq!(s2.subscriber().last.get(), 0);

        let sig = Signal::<i32>::new();
        sig.connect(s2.as_ref());
        assert_eq!(registry.open(44, s2.as_ref()), Err(LinkError::AlreadyJoined));

        registry.broadcast(44, &452);
        assert_eq!(s1.subscriber().last.get(), 452);
        assert_eq!(s2.subscriber().last.get(), 0);
        assert_eq!(sig.len(), 1);

        s2.disconnect();
        assert_eq!(registry.open(44, s2.as_ref()), Ok(()));

        registry.broadcast(44, &956);
        assert_eq!(s1.subscriber().last.get(), 956);
        assert_eq!(s2.subscriber().last.get(), 956);

        assert!(!sig.emit(&123));
        assert_eq!(s1.subscriber().last.get(), 956);
        assert_eq!(s2.subscriber().last.get(), 956);
    }

    #[test]
    fn test_open_twice_on_same_key_is_rejected() {
        let registry = Registry::new();
        let s = pin!(ProbeSlot::new(Probe::default()));
        assert_eq!(registry.open(1, s.as_ref()), Ok(()));
        assert_eq!(registry.open(1, s.as_ref()), Err(LinkError::AlreadyJoined));
        assert_eq!(registry.subscriber_count::<i32>(1), 1);
    }

    #[test]
    fn test_broadcast_without_subscribers_creates_empty_entry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(!registry.broadcast(9, &1_i32));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.subscriber_count::<i32>(9), 0);
    }

    #[test]
    fn test_addresses_and_shapes_are_distinct() {
        let texts = Cell::new(0usize);
        let registry = Registry::new();
        let ints = pin!(ProbeSlot::new(Probe::default()));
        let text = pin!(Slot::<str, _>::new(|s: &str| texts.set(s.len())));

        registry.open(44, ints.as_ref()).unwrap();
        registry.open(44, text.as_ref()).unwrap();

        assert!(!registry.broadcast(45, &1_i32));
        assert_eq!(ints.subscriber().last.get(), 0);

        assert!(registry.broadcast(44, "hello"));
        assert_eq!(texts.get(), 5);
        assert_eq!(ints.subscriber().last.get(), 0);

        assert!(registry.broadcast(44, &3_i32));
        assert_eq!(ints.subscriber().last.get(), 3);
    }

    #[test]
    fn test_close_is_idempotent() {
        let registry = Registry::new();
        let s = pin!(ProbeSlot::new(Probe::default()));
        registry.open(2, s.as_ref()).unwrap();

        registry.close(&*s);
        registry.close(&*s);
        assert!(!s.subscriber().connected.get());
        assert!(!registry.broadcast(2, &5));
        assert_eq!(s.subscriber().last.get(), 0);
    }

    #[test]
    fn test_independent_registries_do_not_collide() {
        let a = Registry::with_config(Config::named("a"));
        let b = Registry::with_config(Config::named("b"));
        let s = pin!(ProbeSlot::new(Probe::default()));
        a.open(7, s.as_ref()).unwrap();

        assert!(!b.broadcast(7, &1));
        assert!(a.broadcast(7, &2));
        assert_eq!(s.subscriber().last.get(), 2);
    }

    #[test]
    fn test_dropping_registry_detaches_subscribers() {
        let s = pin!(ProbeSlot::new(Probe::default()));
        {
            let registry = Registry::new();
            registry.open(5, s.as_ref()).unwrap();
            assert!(s.is_connected());
        }
        assert!(!s.is_connected());
        assert!(!s.subscriber().connected.get());
    }

    #[test]
    fn test_subscriber_may_open_other_key_during_broadcast() {
        let late = pin!(ProbeSlot::new(Probe::default()));
        let late_ref = late.as_ref();
        let registry = Rc::new(Registry::new());
        let handle = Rc::clone(&registry);
        let opener = pin!(Slot::<i32, _>::new(move |_: &i32| {
            let _ = handle.open(11, late_ref);
        }));
        registry.open(10, opener.as_ref()).unwrap();

        assert!(registry.broadcast(10, &1));
        assert!(late.is_connected());
        assert!(registry.broadcast(11, &8));
        assert_eq!(late.subscriber().last.get(), 8);
    }

    #[test]
    fn test_broadcast_order_is_newest_first() {
        let order = RefCell::new(Vec::new());
        let registry = Registry::new();
        let a = pin!(Slot::<i32, _>::new(|_: &i32| order.borrow_mut().push('a')));
        let b = pin!(Slot::<i32, _>::new(|_: &i32| order.borrow_mut().push('b')));
        let c = pin!(Slot::<i32, _>::new(|_: &i32| order.borrow_mut().push('c')));
        registry.open(20, a.as_ref()).unwrap();
        registry.open(20, b.as_ref()).unwrap();
        registry.open(20, c.as_ref()).unwrap();

        assert!(registry.broadcast(20, &0));
        assert_eq!(*order.borrow(), vec!['c', 'b', 'a']);
        assert_eq!(registry.subscriber_count::<i32>(20), 3);
    }

    #[test]
    fn test_channel_is_shared_per_key_and_shape() {
        fn inc(x: i32) -> i32 {
            x + 1
        }

        let registry = Registry::new();
        registry.channel::<i32, i32>(3).set_mutable(inc).unwrap();

        assert_eq!(registry.channel::<i32, i32>(3).call(1), 2);
        assert!(!registry.channel::<i32, bool>(3).exists());
        assert!(!registry.channel::<i32, i32>(4).exists());
    }
}

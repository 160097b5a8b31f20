//! # intercast
//!
//! **Intercast** is an in-process signaling library for Rust.
//!
//! Producers emit typed events without knowing who (or how many) consumers
//! listen; consumers join and leave at any time without a heap allocation per
//! registration. Two addressing styles coexist, plus a single-destination
//! function binding facility.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   Explicit channel                 Implicit channel                 Function channel
//!   (producer owns it)               (shared address only)            (one callable)
//!
//!   let sig = Signal::<A>::new();    open::<44, _, _>(slot)           channel::<3, A, R>()
//!   sig.connect(slot)                broadcast::<44, A>(&args)          .set_mutable(f)
//!   sig.emit(&args)                         │                           .set_immutable(f)
//!          │                                ▼                         Socket::attach_to::<3>()
//!          │                    ┌───────────────────────┐                    │
//!          │                    │ Registry (per thread  │◄───────────────────┘
//!          │                    │  or explicit context) │
//!          │                    │  (addr, A) → List<A>  │
//!          │                    │  (addr, fn) → Channel │
//!          │                    └──────────┬────────────┘
//!          ▼                               ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │       List<A>: intrusive, doubly-linked, newest-first             │
//! │   [sentinel] ─► Slot C ─► Slot B ─► Slot A ─┐                     │
//! │        ▲────────────────────────────────────┘                     │
//! └───────────────────────────────────────────────────────────────────┘
//!                                  │ on_signal(&args)
//!                                  ▼
//!                       subscriber: impl Subscribe<A>
//! ```
//!
//! ### Lifecycle of a subscriber
//! ```text
//! Slot::new(sub) ──► pin!(..) ──► connect / open ──► emit / broadcast ──► on_signal
//!                                     │
//!                                     ├─► on_connect()
//!                                     │
//! disconnect() / close() / drop ──────┴─► on_disconnect()
//! ```
//!
//! ## Features
//! | Area                 | Description                                                   | Key types / functions                |
//! |----------------------|---------------------------------------------------------------|--------------------------------------|
//! | **Subscribers**      | Receive events of a fixed shape, with join/leave hooks        | [`Subscribe`], [`Slot`]              |
//! | **Explicit channel** | Producer-owned fan-out                                        | [`Signal`]                           |
//! | **Implicit channel** | Address-keyed fan-out, producer and consumer never meet       | [`open`], [`broadcast`], [`close`]   |
//! | **Function channel** | One callable per address, optionally frozen                   | [`Channel`], [`Binding`], [`Socket`] |
//! | **Registry**         | Per-thread default or explicit context                        | [`Registry`], [`Config`]             |
//! | **Errors**           | Recoverable, returned, never panicked                         | [`LinkError`]                        |
//! | **Logging**          | `tracing` records; optional logging subscriber                | `LogWriter` (feature `logging`)      |
//!
//! ## Guarantees and preconditions
//! - Every operation is synchronous and completes before returning.
//! - Joining or leaving a channel never allocates; creating a channel allocates once.
//! - Dispatch order is most-recently-joined first.
//! - A slot belongs to at most one channel. `Signal::connect` moves it;
//!   `open` and `Signal::try_connect` refuse with [`LinkError::AlreadyJoined`].
//! - Dropping a slot unlinks it; dropping a channel or registry unlinks its members.
//! - `Signal<'a, _>` and `Registry<'a>` accept only subscribers valid for `'a`;
//!   the thread-local registry requires `'static` subscribers. A leaked slot
//!   therefore never dispatches through a dangling borrow.
//! - All types are `!Send`/`!Sync`. Re-entrant use from callbacks is limited to
//!   the running subscriber (or its successor) leaving and to other keys.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use std::pin::pin;
//! use intercast::{Signal, Slot, Subscribe};
//!
//! #[derive(Default)]
//! struct Thermometer {
//!     last: Cell<f32>,
//! }
//!
//! impl Subscribe<f32> for Thermometer {
//!     fn on_signal(&self, t: &f32) {
//!         self.last.set(*t);
//!     }
//! }
//!
//! let sensor = Signal::<f32>::new();
//! let display = pin!(Slot::new(Thermometer::default()));
//!
//! sensor.connect(display.as_ref());
//! assert!(sensor.emit(&21.5));
//! assert_eq!(display.subscriber().last.get(), 21.5);
//!
//! display.disconnect();
//! assert!(!sensor.emit(&22.0)); // nobody is listening
//! ```

mod core;
mod error;
mod events;
mod link;
mod subscribers;

/// Compile-time (or runtime) key distinguishing channels of the same shape.
pub type Address = u32;

// ---- Public re-exports ----

pub use core::{Binding, Channel, Config, Registry, Socket};
pub use error::LinkError;
pub use events::{broadcast, channel, close, open, Signal};
pub use subscribers::{Slot, Subscribe};

// Optional: expose a simple built-in logging subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;

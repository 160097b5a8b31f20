//! # Implicit Broadcast Example
//!
//! Producer and consumers never reference each other: they only agree on an address.
//!
//! ## Run
//! ```bash
//! RUST_LOG=trace cargo run --example broadcast
//! ```

use std::cell::Cell;
use std::pin::pin;

use intercast::{broadcast, open, Address, LinkError, Signal, Slot, Subscribe};
use tracing_subscriber::EnvFilter;

const TEMPERATURE: Address = 44;

/// Keeps the last reading; owns its state so it can join the thread registry.
#[derive(Default)]
struct Gauge {
    last: Cell<i32>,
}

impl Subscribe<i32> for Gauge {
    fn on_signal(&self, v: &i32) {
        self.last.set(*v);
    }
}

fn sensor_tick(value: i32) {
    if !broadcast::<TEMPERATURE, i32>(&value) {
        println!("nobody is listening for {value}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    sensor_tick(1);

    let s1 = pin!(Slot::<i32, _>::new(Gauge::default()));
    let s2 = pin!(Slot::<i32, _>::new(Gauge::default()));

    open::<TEMPERATURE, _, _>(s1.as_ref()).expect("s1 is free-standing");
    sensor_tick(12);
    println!(
        "display={} logger={}",
        s1.subscriber().last.get(),
        s2.subscriber().last.get()
    );

    let local = Signal::<i32>::new();
    local.connect(s2.as_ref());
    match open::<TEMPERATURE, _, _>(s2.as_ref()) {
        Err(LinkError::AlreadyJoined) => println!("s2 is busy on a local signal"),
        other => println!("unexpected: {other:?}"),
    }

    s2.disconnect();
    open::<TEMPERATURE, _, _>(s2.as_ref()).expect("s2 was disconnected");
    sensor_tick(956);
    println!(
        "display={} logger={}",
        s1.subscriber().last.get(),
        s2.subscriber().last.get()
    );
}

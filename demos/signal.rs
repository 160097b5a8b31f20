//! # Explicit Signal Example
//!
//! Shows a producer-owned signal with a stateful subscriber, a closure and the
//! built-in `LogWriter`.
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example signal --features logging
//! ```

use std::cell::Cell;
use std::pin::pin;

use intercast::{LogWriter, Signal, Slot, Subscribe};
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Stats {
    readings: Cell<u32>,
    peak: Cell<i32>,
}

impl Stats {
    fn print(&self) {
        println!();
        println!("Stats:");
        println!(" ├─► Readings: {}", self.readings.get());
        println!(" └─► Peak:     {}", self.peak.get());
    }
}

impl Subscribe<i32> for Stats {
    fn on_signal(&self, v: &i32) {
        self.readings.set(self.readings.get() + 1);
        self.peak.set(self.peak.get().max(*v));
    }

    fn name(&self) -> &'static str {
        "stats"
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sensor = Signal::<i32>::new();

    let stats = pin!(Slot::new(Stats::default()));
    let log = pin!(Slot::new(LogWriter::new("sensor")));
    sensor.connect(stats.as_ref());
    sensor.connect(log.as_ref());

    for v in [12, 40, 7] {
        sensor.emit(&v);
    }

    {
        let alarm = pin!(Slot::new(|v: &i32| {
            if *v > 50 {
                println!("alarm: {v}");
            }
        }));
        sensor.connect(alarm.as_ref());
        sensor.emit(&64);
        println!("subscribers while alarm is in scope: {}", sensor.len());
    }
    println!("subscribers after alarm left scope: {}", sensor.len());

    log.disconnect();
    sensor.emit(&3);

    stats.subscriber().print();
}

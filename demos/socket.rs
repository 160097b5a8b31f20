//! # Function Channel Example
//!
//! Binds a handler to an address, freezes it, and calls it through a socket.
//!
//! ## Run
//! ```bash
//! RUST_LOG=trace cargo run --example socket
//! ```

use intercast::{Config, Registry, Socket};
use tracing_subscriber::EnvFilter;

const SCALE: u32 = 3;

fn double(x: i64) -> i64 {
    x * 2
}

fn triple(x: i64) -> i64 {
    x * 3
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = Registry::with_config(Config::named("demo"));
    let socket = Socket::<i64, i64>::attached(&registry, SCALE);

    println!("unbound: {}", socket.call(7));

    let scale = registry.channel::<i64, i64>(SCALE);
    scale.set_mutable(double).expect("mutable channel");
    println!("double:  {}", socket.call(7));

    scale.set_immutable(triple).expect("freeze a mutable channel");
    println!("triple:  {}", socket.call(7));

    if let Err(e) = scale.set_mutable(double) {
        println!("rebind rejected: {} ({})", e, e.as_label());
    }
    if let Err(e) = scale.erase() {
        println!("erase rejected:  {}", e.as_message());
    }
    println!("still:   {}", socket.call(7));
}

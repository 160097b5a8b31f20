//! Intrusive membership primitives shared by every channel kind.

mod list;
mod node;

pub(crate) use list::List;
pub(crate) use node::{Link, Vtable};

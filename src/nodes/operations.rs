//! Operations on trees of [`Node`](crate::Node)s

mod clone;
mod deallocate;
mod insert;
mod iterator;
mod lookup;
mod minmax;

pub use clone::*;
pub use deallocate::*;
pub use insert::*;
pub use iterator::*;
pub use lookup::*;
pub use minmax::*;

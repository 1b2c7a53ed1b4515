//! Collection types built on the ternary search tree.

mod set;
pub use set::*;

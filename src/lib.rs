#![no_std]
#![deny(
    missing_docs,
    unsafe_code,
    deprecated_in_future,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    rustdoc::invalid_codeblock_attributes
)]
#![doc(
    html_playground_url = "https://play.rust-lang.org/",
    test(attr(deny(warnings)))
)]

//! Ternary search tree implementation
//!
//! A ternary search tree stores strings one character per node. Each node has
//! three children: a `lower` subtree for characters that sort before it, an
//! `equal` subtree continuing the strings that pass through it, and a `higher`
//! subtree for characters that sort after it. Nodes that complete a stored
//! string are marked as the end of a word.
//!
//! The main entry point is [`TernarySearchTree`]. The raw node operations and
//! the [`visitor`] module are exposed for inspecting the tree shape.
//!
//! # References
//!
//!  - Bentley, J. L., & Sedgewick, R. (1997, January). Fast algorithms for
//!    sorting and searching strings. In Proceedings of the eighth annual
//!    ACM-SIAM symposium on Discrete algorithms (pp. 360-369).

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod collections;
mod nodes;

#[doc(hidden)]
pub mod tests_common;

pub use collections::*;
pub use nodes::{visitor, *};

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

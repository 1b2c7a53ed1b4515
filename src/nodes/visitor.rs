//! Utilities for inspecting the tree structure.

mod pretty_printer;
mod tree_stats;
mod well_formed;

use crate::{Link, Node};
use alloc::{vec, vec::Vec};
pub use pretty_printer::*;
pub use tree_stats::*;
pub use well_formed::*;

/// The position of a node within the tree, as seen by a [`Visitor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeContext {
    /// A number unique to this node within a single walk, assigned in visit
    /// order starting from 0 at the root.
    pub id: usize,
    /// The number of links between the root and this node.
    pub depth: usize,
    /// The character position of this node within the words that pass through
    /// it, which is the number of `equal` links between the root and the node.
    pub position: usize,
    /// The id of the parent node and the link this node hangs from, or `None`
    /// for the root.
    pub parent: Option<(usize, Link)>,
}

/// The `Visitor` trait allows creating new operations on the tree by handling
/// each node as a [`walk`] reaches it.
pub trait Visitor: Sized {
    /// The type of value that the visitor produces.
    type Output;

    /// Handle a single node of the tree.
    fn visit_node(&mut self, node: &Node, context: NodeContext);

    /// Consume the visitor and produce its output once every node has been
    /// visited.
    fn finish(self) -> Self::Output;
}

/// Visit every node of the tree exactly once, in pre-order: a node, then its
/// `lower`, `equal` and `higher` subtrees.
///
/// The walk keeps an explicit stack, so it is safe for degenerate trees whose
/// depth is far larger than the call stack allows.
pub fn walk<V: Visitor>(root: Option<&Node>, mut visitor: V) -> V::Output {
    let mut stack: Vec<(&Node, usize, usize, Option<(usize, Link)>)> = match root {
        Some(root) => vec![(root, 0, 0, None)],
        None => Vec::new(),
    };
    let mut next_id = 0;

    while let Some((node, depth, position, parent)) = stack.pop() {
        let id = next_id;
        next_id += 1;

        visitor.visit_node(
            node,
            NodeContext {
                id,
                depth,
                position,
                parent,
            },
        );

        // reversed so that `lower` is visited first
        for link in [Link::Higher, Link::Equal, Link::Lower] {
            if let Some(child) = node.child(link) {
                let child_position = match link {
                    Link::Equal => position + 1,
                    Link::Lower | Link::Higher => position,
                };
                stack.push((child, depth + 1, child_position, Some((id, link))));
            }
        }
    }

    visitor.finish()
}

/// A visitor which counts the nodes that end a word.
#[derive(Debug, Default)]
pub struct WordCounter {
    num_words: usize,
}

impl WordCounter {
    /// Iterate through the given tree and return the number of stored words.
    pub fn count(root: Option<&Node>) -> usize {
        walk(root, WordCounter::default())
    }
}

impl Visitor for WordCounter {
    type Output = usize;

    fn visit_node(&mut self, node: &Node, _: NodeContext) {
        if node.is_end_of_word() {
            self.num_words += 1;
        }
    }

    fn finish(self) -> Self::Output {
        self.num_words
    }
}

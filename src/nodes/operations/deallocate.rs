use crate::Node;
use alloc::{boxed::Box, vec, vec::Vec};

/// Deallocate the given node and all of its descendants, returning the number
/// of nodes that were freed.
///
/// Dropping a [`Node`] already tears its subtree down with an explicit stack.
/// This does the same walk, while counting the nodes.
pub fn deallocate_tree(root: Box<Node>) -> usize {
    let mut stack: Vec<Box<Node>> = vec![root];
    let mut num_freed = 0;

    while let Some(mut node) = stack.pop() {
        stack.extend(node.take_children());
        drop(node);
        num_freed += 1;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(num_freed, "deallocated tree");

    num_freed
}

use crate::Node;
use alloc::{boxed::Box, vec, vec::Vec};

enum CloneStep<'a> {
    Enter(&'a Node),
    Exit(&'a Node),
}

/// Make a deep copy of the given tree, preserving its exact shape.
///
/// The copy is built bottom-up with explicit stacks, so deep trees do not
/// overflow the call stack.
pub fn clone_tree(root: &Node) -> Box<Node> {
    let mut steps = vec![CloneStep::Enter(root)];
    // completed copies, with the most recently finished subtree on top
    let mut finished: Vec<Box<Node>> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            CloneStep::Enter(node) => {
                steps.push(CloneStep::Exit(node));
                // children are pushed in order so that `higher` is copied first
                // and `lower` ends up on top of `finished`
                steps.extend(node.children().map(|(_, child)| CloneStep::Enter(child)));
            },
            CloneStep::Exit(node) => {
                let mut copy = node.shallow_copy();
                if node.lower.is_some() {
                    copy.lower = finished.pop();
                }
                if node.equal.is_some() {
                    copy.equal = finished.pop();
                }
                if node.higher.is_some() {
                    copy.higher = finished.pop();
                }
                finished.push(Box::new(copy));
            },
        }
    }

    debug_assert_eq!(finished.len(), 1, "clone should produce a single root");
    finished
        .pop()
        .unwrap_or_else(|| Box::new(root.shallow_copy()))
}

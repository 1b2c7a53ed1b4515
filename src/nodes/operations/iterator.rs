use crate::Node;
use alloc::{string::String, vec::Vec};
use core::iter::FusedIterator;

#[derive(Debug, Clone, Copy)]
enum Frame<'a> {
    /// Schedule the subtree rooted at this node, whose words continue a
    /// prefix of the given byte length.
    Expand(&'a Node, usize),
    /// Append this node's character to the prefix of the given byte length,
    /// then emit the word if it ends here.
    Visit(&'a Node, usize),
}

/// An in-order iterator over the words spelled out by a tree of [`Node`]s.
///
/// Words are produced in sorted order: for each node the `lower` subtree is
/// visited first, then the node itself and its `equal` subtree, then the
/// `higher` subtree. The traversal keeps an explicit stack, which is bounded by
/// the number of nodes rather than the call stack depth.
#[derive(Debug, Clone)]
pub struct RawWords<'a> {
    stack: Vec<Frame<'a>>,
    buffer: String,
}

impl<'a> RawWords<'a> {
    /// Create an iterator over all words stored under the given root.
    pub fn new(root: Option<&'a Node>) -> Self {
        Self::with_prefix(root, String::new())
    }

    /// Create an iterator over all words stored under the given root, each
    /// prepended with the given prefix.
    pub fn with_prefix(root: Option<&'a Node>, prefix: String) -> Self {
        let prefix_len = prefix.len();
        RawWords {
            stack: root
                .map(|root| Frame::Expand(root, prefix_len))
                .into_iter()
                .collect(),
            buffer: prefix,
        }
    }
}

impl Iterator for RawWords<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Expand(node, prefix_len) => {
                    if let Some(higher) = node.higher.as_deref() {
                        self.stack.push(Frame::Expand(higher, prefix_len));
                    }
                    self.stack.push(Frame::Visit(node, prefix_len));
                    if let Some(lower) = node.lower.as_deref() {
                        self.stack.push(Frame::Expand(lower, prefix_len));
                    }
                },
                Frame::Visit(node, prefix_len) => {
                    self.buffer.truncate(prefix_len);
                    self.buffer.push(node.character);

                    if let Some(equal) = node.equal.as_deref() {
                        self.stack.push(Frame::Expand(equal, self.buffer.len()));
                    }

                    if node.is_end_of_word {
                        return Some(self.buffer.clone());
                    }
                },
            }
        }

        None
    }
}

impl FusedIterator for RawWords<'_> {}

use crate::{Link, Node};
use alloc::{string::String, vec, vec::Vec};
use core::{error::Error, fmt};

/// An issue with the well-formed-ness of the tree. See the documentation on
/// [`WellFormedChecker`] for more context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedTreeError {
    /// A node was found in a sibling chain outside the character range
    /// implied by its ancestors in that chain.
    SiblingOutOfOrder {
        /// The characters leading up to the sibling chain
        key_prefix: String,
        /// The character of the misplaced node
        character: char,
        /// The exclusive lower bound on characters at this place in the chain
        lower_bound: Option<char>,
        /// The exclusive upper bound on characters at this place in the chain
        upper_bound: Option<char>,
    },
    /// A node neither ends a word nor continues one through its `equal` link,
    /// so the characters leading to it are not the prefix of any stored word.
    DeadEnd {
        /// The characters leading up to and including the node
        key_prefix: String,
    },
}

impl fmt::Display for MalformedTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedTreeError::SiblingOutOfOrder {
                key_prefix,
                character,
                lower_bound,
                upper_bound,
            } => {
                write!(
                    f,
                    "Found a node with character [{character:?}] after the prefix \
                     [{key_prefix:?}] outside the range expected by its siblings! Expected a \
                     character between [{lower_bound:?}] and [{upper_bound:?}] (exclusive)",
                )
            },
            MalformedTreeError::DeadEnd { key_prefix } => {
                write!(
                    f,
                    "Found a node at [{key_prefix:?}] that neither ends a word nor has an equal \
                     child",
                )
            },
        }
    }
}

impl Error for MalformedTreeError {}

struct CheckFrame<'a> {
    node: &'a Node,
    /// Byte length of the prefix shared by this node and its siblings
    prefix_len: usize,
    lower_bound: Option<char>,
    upper_bound: Option<char>,
}

/// A checker of the tree which verifies that the tree is well-formed.
///
/// In this context, well-formed means that in the tree:
///  1. every sibling chain (nodes linked through `lower` and `higher`) is a
///     binary search tree on the node characters, with no duplicates
///  2. every node either ends a word or has an `equal` child
///
/// #1 guarantees that lookups find every stored word, and #2 guarantees that a
/// matched prefix always belongs to some stored word. Neither can be broken
/// through the public API, but this checker can be used to sanity check the
/// tree in unit tests or other test cases.
///
/// This checker will only return a single issue at a time. A tree is only
/// "well-formed" (by the definition given above) if the checker returns
/// `Ok(_)`.
#[derive(Debug, Default)]
pub struct WellFormedChecker {
    current_key_prefix: String,
}

impl WellFormedChecker {
    /// Traverse the given tree and check that it is well-formed, returning the
    /// number of stored words.
    ///
    /// The traversal keeps an explicit stack, so very deep trees are fine.
    pub fn check(root: Option<&Node>) -> Result<usize, MalformedTreeError> {
        let mut checker = WellFormedChecker::default();

        let result = checker.check_tree(root);

        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::debug!(%err, "tree is not well-formed");
        }

        result
    }

    fn check_tree(&mut self, root: Option<&Node>) -> Result<usize, MalformedTreeError> {
        let mut stack: Vec<CheckFrame<'_>> = match root {
            Some(node) => vec![CheckFrame {
                node,
                prefix_len: 0,
                lower_bound: None,
                upper_bound: None,
            }],
            None => Vec::new(),
        };
        let mut num_words = 0;

        // `equal` is always on top of its siblings, so by the time a frame is
        // popped the current prefix still holds that frame's prefix and only
        // needs to be truncated back to it.
        while let Some(frame) = stack.pop() {
            let CheckFrame {
                node,
                prefix_len,
                lower_bound,
                upper_bound,
            } = frame;

            self.current_key_prefix.truncate(prefix_len);

            let character = node.character();
            let below_lower = lower_bound.is_some_and(|bound| character <= bound);
            let above_upper = upper_bound.is_some_and(|bound| character >= bound);
            if below_lower || above_upper {
                return Err(MalformedTreeError::SiblingOutOfOrder {
                    key_prefix: self.current_key_prefix.clone(),
                    character,
                    lower_bound,
                    upper_bound,
                });
            }

            if node.is_end_of_word() {
                num_words += 1;
            } else if node.child(Link::Equal).is_none() {
                self.current_key_prefix.push(character);
                return Err(MalformedTreeError::DeadEnd {
                    key_prefix: self.current_key_prefix.clone(),
                });
            }

            if let Some(higher) = node.child(Link::Higher) {
                stack.push(CheckFrame {
                    node: higher,
                    prefix_len,
                    lower_bound: Some(character),
                    upper_bound,
                });
            }
            if let Some(lower) = node.child(Link::Lower) {
                stack.push(CheckFrame {
                    node: lower,
                    prefix_len,
                    lower_bound,
                    upper_bound: Some(character),
                });
            }
            if let Some(equal) = node.child(Link::Equal) {
                stack.push(CheckFrame {
                    node: equal,
                    prefix_len: prefix_len + character.len_utf8(),
                    lower_bound: None,
                    upper_bound: None,
                });
            }

            self.current_key_prefix.push(character);
        }

        Ok(num_words)
    }
}

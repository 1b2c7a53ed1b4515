//! Ternary search tree node definition

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

/// The three child slots of a [`Node`].
///
/// `Lower` and `Higher` hold siblings at the same character position, while
/// `Equal` continues the same string at the next character position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Link {
    /// Characters less than the node's character.
    Lower,
    /// The next character of the same string.
    Equal,
    /// Characters greater than the node's character.
    Higher,
}

impl Link {
    /// All child slots, in in-order position.
    pub const ALL: [Link; 3] = [Link::Lower, Link::Equal, Link::Higher];

    /// Return a lowercase name for this link.
    pub const fn name(self) -> &'static str {
        match self {
            Link::Lower => "lower",
            Link::Equal => "equal",
            Link::Higher => "higher",
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single character position of one or more stored strings.
///
/// Each node exclusively owns its three children. Dropping a node tears down
/// its whole subtree with an explicit stack, so arbitrarily deep trees can be
/// dropped without overflowing the call stack.
pub struct Node {
    pub(crate) character: char,
    pub(crate) is_end_of_word: bool,
    pub(crate) lower: Option<Box<Node>>,
    pub(crate) equal: Option<Box<Node>>,
    pub(crate) higher: Option<Box<Node>>,
}

impl Node {
    /// Create a new node with no children that does not end a word.
    pub const fn new(character: char) -> Self {
        Node {
            character,
            is_end_of_word: false,
            lower: None,
            equal: None,
            higher: None,
        }
    }

    /// The character stored at this node.
    pub fn character(&self) -> char {
        self.character
    }

    /// Return true if some stored string terminates exactly at this node.
    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    /// Return true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.lower.is_none() && self.equal.is_none() && self.higher.is_none()
    }

    /// Return the child in the given slot, if present.
    pub fn child(&self, link: Link) -> Option<&Node> {
        match link {
            Link::Lower => self.lower.as_deref(),
            Link::Equal => self.equal.as_deref(),
            Link::Higher => self.higher.as_deref(),
        }
    }

    /// Return the slot for the given link.
    pub(crate) fn slot_mut(&mut self, link: Link) -> &mut Option<Box<Node>> {
        match link {
            Link::Lower => &mut self.lower,
            Link::Equal => &mut self.equal,
            Link::Higher => &mut self.higher,
        }
    }

    /// Iterate over the present children, in in-order position.
    pub fn children(&self) -> impl Iterator<Item = (Link, &Node)> {
        Link::ALL
            .into_iter()
            .filter_map(|link| self.child(link).map(|child| (link, child)))
    }

    /// Detach all children from this node and return them.
    pub(crate) fn take_children(&mut self) -> impl Iterator<Item = Box<Node>> {
        [self.lower.take(), self.equal.take(), self.higher.take()]
            .into_iter()
            .flatten()
    }

    /// Copy the character and end-of-word flag, without any children.
    pub(crate) fn shallow_copy(&self) -> Self {
        let mut copy = Node::new(self.character);
        copy.is_end_of_word = self.is_end_of_word;
        copy
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.take_children().collect();

        while let Some(mut node) = stack.pop() {
            // detached before `node` drops, so that drop never recurses
            stack.extend(node.take_children());
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("character", &self.character)
            .field("is_end_of_word", &self.is_end_of_word)
            .field("lower", &self.lower.as_ref().map(|n| n.character))
            .field("equal", &self.equal.as_ref().map(|n| n.character))
            .field("higher", &self.higher.as_ref().map(|n| n.character))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clone_tree, insert_term, tests_common::build_deep_chain};
    use alloc::string::String;

    #[test]
    fn new_node_is_leaf_and_not_end_of_word() {
        let node = Node::new('x');
        assert_eq!(node.character(), 'x');
        assert!(!node.is_end_of_word());
        assert!(node.is_leaf());
        assert_eq!(node.children().count(), 0);
    }

    #[test]
    fn children_are_yielded_in_order() {
        let mut node = Node::new('m');
        node.higher = Some(Box::new(Node::new('z')));
        node.lower = Some(Box::new(Node::new('a')));

        let children: Vec<_> = node
            .children()
            .map(|(link, child)| (link, child.character()))
            .collect();
        assert_eq!(children, [(Link::Lower, 'a'), (Link::Higher, 'z')]);

        *node.slot_mut(Link::Equal) = Some(Box::new(Node::new('n')));
        assert_eq!(node.child(Link::Equal).map(Node::character), Some('n'));

        let taken: Vec<_> = node.take_children().map(|n| n.character()).collect();
        assert_eq!(taken, ['a', 'n', 'z']);
        assert!(node.is_leaf());
    }

    #[test]
    fn shallow_copy_drops_children() {
        let mut node = Node::new('q');
        node.is_end_of_word = true;
        node.equal = Some(Box::new(Node::new('u')));

        let copy = node.shallow_copy();
        assert_eq!(copy.character(), 'q');
        assert!(copy.is_end_of_word());
        assert!(copy.is_leaf());
    }

    #[test]
    fn link_display() {
        assert_eq!(alloc::format!("{}", Link::Lower), "lower");
        assert_eq!(Link::Higher.name(), "higher");
    }

    #[test]
    fn drop_long_word_chain() {
        #[cfg(not(miri))]
        const WORD_LEN: usize = 1_000_000;
        #[cfg(miri)]
        const WORD_LEN: usize = 200;

        // one node per character, linked through `equal`
        let word: String = core::iter::repeat('a').take(WORD_LEN).collect();
        let mut root = None;
        let result = insert_term(&mut root, &word);
        assert_eq!(result.allocated_nodes, WORD_LEN);

        let copy = root.as_deref().map(clone_tree);
        drop(root);
        drop(copy);
    }

    #[test]
    fn drop_deep_higher_chain() {
        #[cfg(not(miri))]
        const NUM_NODES: usize = 1_000_000;
        #[cfg(miri)]
        const NUM_NODES: usize = 200;

        drop(build_deep_chain(NUM_NODES));
    }
}

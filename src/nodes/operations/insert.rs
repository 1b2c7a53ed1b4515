use crate::{Link, Node};
use alloc::boxed::Box;
use core::cmp::Ordering;

/// The outcome of an [`insert_term`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InsertResult {
    /// `true` if the term was not already stored in the tree.
    pub new_word: bool,
    /// The number of nodes that were allocated to store the term.
    pub allocated_nodes: usize,
}

/// Insert the given term into the tree rooted at the given slot.
///
/// The tree is descended one character at a time: a character less than the
/// current node moves to the `lower` slot, a greater character to the `higher`
/// slot, and a matching character consumes that character and moves to the
/// `equal` slot. Empty slots on the way are filled with new nodes. The node
/// holding the final character is marked as the end of a word.
///
/// Re-inserting a term that is already present does not change the structure.
///
/// The empty term has no node representation, so it is ignored here and
/// reported as not new. Callers that store the empty string need to track it
/// separately.
pub fn insert_term(root: &mut Option<Box<Node>>, term: &str) -> InsertResult {
    let mut chars = term.chars();
    let Some(mut current) = chars.next() else {
        return InsertResult::default();
    };

    let mut allocated_nodes = 0;
    let mut slot = root;

    loop {
        let node = slot.get_or_insert_with(|| {
            allocated_nodes += 1;
            Box::new(Node::new(current))
        });

        let link = match current.cmp(&node.character) {
            Ordering::Less => Link::Lower,
            Ordering::Greater => Link::Higher,
            Ordering::Equal => match chars.next() {
                Some(next) => {
                    current = next;
                    Link::Equal
                },
                None => {
                    let new_word = !node.is_end_of_word;
                    node.is_end_of_word = true;

                    return InsertResult {
                        new_word,
                        allocated_nodes,
                    };
                },
            },
        };

        slot = node.slot_mut(link);
    }
}

#[cfg(test)]
mod tests;

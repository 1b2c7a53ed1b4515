use crate::Node;
use core::cmp::Ordering;

/// Search for the node where the given term ends.
///
/// The descent uses the same three-way comparison as
/// [`insert_term`](crate::insert_term). If every character of the term is
/// matched, the node holding the final character is returned, regardless of
/// whether it is marked as the end of a word. Returns `None` if some required
/// child is missing, or if the term is empty.
pub fn search_term<'a>(root: Option<&'a Node>, term: &str) -> Option<&'a Node> {
    let mut chars = term.chars();
    let mut current = chars.next()?;
    let mut node = root?;

    loop {
        node = match current.cmp(&node.character) {
            Ordering::Less => node.lower.as_deref()?,
            Ordering::Greater => node.higher.as_deref()?,
            Ordering::Equal => {
                current = match chars.next() {
                    Some(next) => next,
                    None => return Some(node),
                };
                node.equal.as_deref()?
            },
        };
    }
}

/// Return true if the given term was stored in the tree as a complete word.
pub fn contains_term(root: Option<&Node>, term: &str) -> bool {
    search_term(root, term).is_some_and(Node::is_end_of_word)
}

/// Return true if every character of the given term can be matched along a
/// path of the tree, meaning at least one stored word begins with the term.
///
/// For the empty term this only depends on whether the tree has any nodes.
pub fn contains_prefix(root: Option<&Node>, term: &str) -> bool {
    if term.is_empty() {
        return root.is_some();
    }

    search_term(root, term).is_some()
}

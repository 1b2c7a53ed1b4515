use crate::Node;
use alloc::string::String;

/// Search for the smallest stored word, by lexicographic ordering.
///
/// At each character position the lowest sibling is chosen. A word ending at
/// that node is returned immediately, since it is smaller than any longer word
/// sharing its prefix.
///
/// Returns `None` for an empty tree, or if the walk reaches a node that neither
/// ends a word nor continues one.
pub fn minimum_word(root: Option<&Node>) -> Option<String> {
    let mut word = String::new();
    let mut current = root?;

    loop {
        while let Some(lower) = current.lower.as_deref() {
            current = lower;
        }

        word.push(current.character);
        if current.is_end_of_word {
            return Some(word);
        }

        current = current.equal.as_deref()?;
    }
}

/// Search for the largest stored word, by lexicographic ordering.
///
/// At each character position the highest sibling is chosen, and the walk
/// continues through `equal` for as long as possible, since a longer word
/// sorts after any of its prefixes.
///
/// Returns `None` for an empty tree, or if the walk reaches a leaf that does
/// not end a word.
pub fn maximum_word(root: Option<&Node>) -> Option<String> {
    let mut word = String::new();
    let mut current = root?;

    loop {
        while let Some(higher) = current.higher.as_deref() {
            current = higher;
        }

        word.push(current.character);
        match current.equal.as_deref() {
            Some(equal) => current = equal,
            None if current.is_end_of_word => return Some(word),
            None => return None,
        }
    }
}

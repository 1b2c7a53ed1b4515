//! Key generators and tree builders shared by tests and benchmarks.

use crate::{insert_term, Node};
use alloc::{boxed::Box, string::String, vec, vec::Vec};
use core::iter;

/// Generate keys that build a tree leaning heavily to one side.
///
/// The keys are `"z"`, `"az"`, `"aaz"`, ... up to `max_len` characters long.
pub fn generate_keys_skewed(max_len: usize) -> impl Iterator<Item = String> {
    iter::successors(Some(String::from("z")), move |prev| {
        if prev.chars().count() < max_len {
            let mut key: String = iter::repeat('a').take(prev.chars().count()).collect();
            key.push('z');
            Some(key)
        } else {
            None
        }
    })
}

/// Generate every key of exactly `len` characters drawn from the first
/// `alphabet_size` lowercase letters, in sorted order.
///
/// # Panics
///  - Panics if `alphabet_size` is 0 or greater than 26.
pub fn generate_key_fixed_length(len: usize, alphabet_size: u8) -> impl Iterator<Item = String> {
    assert!(
        (1..=26).contains(&alphabet_size),
        "alphabet size must be between 1 and 26"
    );

    let mut digits = vec![0u8; len];
    let mut done = false;

    iter::from_fn(move || {
        if done {
            return None;
        }

        let key: String = digits.iter().map(|digit| char::from(b'a' + digit)).collect();

        // advance the odometer, least significant digit last
        done = true;
        for digit in digits.iter_mut().rev() {
            if *digit + 1 < alphabet_size {
                *digit += 1;
                done = false;
                break;
            }
            *digit = 0;
        }

        Some(key)
    })
}

/// Generate `count` single-character keys in ascending character order,
/// starting at `'a'`.
///
/// Inserted in order, these keys form a single chain of `higher` links as deep
/// as the number of keys.
pub fn generate_keys_deep_chain(count: usize) -> impl Iterator<Item = String> {
    ('a'..=char::MAX).take(count).map(String::from)
}

/// Reorder the given items so that inserting them in order builds a balanced
/// tree: the median first, then the median of each half, recursively.
///
/// Given sorted input this is the best case insertion order, while the sorted
/// input itself is the worst case.
pub fn median_order<T: Clone>(items: &[T]) -> Vec<T> {
    let mut ordered = Vec::with_capacity(items.len());
    let mut ranges = vec![(0, items.len())];

    while let Some((start, end)) = ranges.pop() {
        if start >= end {
            continue;
        }

        let mid = start + (end - start) / 2;
        ordered.push(items[mid].clone());

        ranges.push((mid + 1, end));
        ranges.push((start, mid));
    }

    ordered
}

/// Build a raw tree by inserting every given term in order.
pub fn setup_tree_from_terms<I>(terms: I) -> Option<Box<Node>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut root = None;
    for term in terms {
        insert_term(&mut root, term.as_ref());
    }
    root
}

/// Build a raw tree holding `num_nodes` single-character words, linked through
/// `higher` in one chain.
///
/// This is the same shape as inserting [`generate_keys_deep_chain`] in order,
/// but built in linear time.
pub fn build_deep_chain(num_nodes: usize) -> Option<Box<Node>> {
    let characters: Vec<char> = ('a'..=char::MAX).take(num_nodes).collect();

    characters.into_iter().rev().fold(None, |higher, character| {
        let mut node = Node::new(character);
        node.is_end_of_word = true;
        node.higher = higher;
        Some(Box::new(node))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skewed_keys() {
        let keys: Vec<_> = generate_keys_skewed(3).collect();
        assert_eq!(keys, ["z", "az", "aaz"]);
    }

    #[test]
    fn fixed_length_keys() {
        let keys: Vec<_> = generate_key_fixed_length(2, 3).collect();
        assert_eq!(keys, ["aa", "ab", "ac", "ba", "bb", "bc", "ca", "cb", "cc"]);

        assert_eq!(generate_key_fixed_length(3, 1).collect::<Vec<_>>(), ["aaa"]);
        assert_eq!(generate_key_fixed_length(0, 4).collect::<Vec<_>>(), [""]);
    }

    #[test]
    fn deep_chain_keys_skip_surrogates() {
        let keys: Vec<_> = generate_keys_deep_chain(3).collect();
        assert_eq!(keys, ["a", "b", "c"]);

        // 'a'..=char::MAX has more than a million characters, even without the
        // surrogate range
        assert_eq!(generate_keys_deep_chain(1_100_000).count(), 1_100_000);
    }

    #[test]
    fn median_order_matches_recursive_definition() {
        assert_eq!(median_order::<u8>(&[]), Vec::<u8>::new());
        assert_eq!(median_order(&[1]), [1]);
        assert_eq!(median_order(&[1, 2, 3, 4, 5, 6, 7]), [4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(median_order(&[1, 2, 3, 4]), [3, 2, 1, 4]);
    }
}

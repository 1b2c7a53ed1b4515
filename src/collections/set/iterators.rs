use crate::{search_term, Node, RawWords};
use alloc::string::String;
use core::iter::FusedIterator;

/// An iterator over the words of a [`TernarySearchTree`], in sorted order.
///
/// This `struct` is created by the [`TernarySearchTree::iter`] method. See its
/// documentation for more.
///
/// [`TernarySearchTree`]: crate::TernarySearchTree
/// [`TernarySearchTree::iter`]: crate::TernarySearchTree::iter
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    /// A word that sorts before everything reachable from `words`
    head: Option<String>,
    words: RawWords<'a>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: Option<&'a Node>, holds_empty: bool) -> Self {
        Iter {
            head: holds_empty.then(String::new),
            words: RawWords::new(root),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.head.take().or_else(|| self.words.next())
    }
}

impl FusedIterator for Iter<'_> {}

/// An iterator over the words of a [`TernarySearchTree`] that begin with a
/// given prefix, in sorted order.
///
/// This `struct` is created by the [`TernarySearchTree::prefix`] method. See
/// its documentation for more.
///
/// [`TernarySearchTree`]: crate::TernarySearchTree
/// [`TernarySearchTree::prefix`]: crate::TernarySearchTree::prefix
#[derive(Debug, Clone)]
pub struct Prefix<'a> {
    inner: Iter<'a>,
}

impl<'a> Prefix<'a> {
    pub(crate) fn new(root: Option<&'a Node>, holds_empty: bool, prefix: &str) -> Self {
        if prefix.is_empty() {
            return Prefix {
                inner: Iter::new(root, holds_empty),
            };
        }

        let inner = match search_term(root, prefix) {
            Some(node) => Iter {
                head: node.is_end_of_word().then(|| String::from(prefix)),
                words: RawWords::with_prefix(node.equal.as_deref(), String::from(prefix)),
            },
            None => Iter::new(None, false),
        };

        Prefix { inner }
    }
}

impl Iterator for Prefix<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl FusedIterator for Prefix<'_> {}

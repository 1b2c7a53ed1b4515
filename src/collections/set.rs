//! Module containing the implementation of the `TernarySearchTree` set and its
//! associated iterators.

use crate::{
    clone_tree, contains_prefix, contains_term, deallocate_tree, insert_term, maximum_word,
    minimum_word,
    visitor::{TextPrinter, TreeStats, TreeStatsCollector, WordCounter},
    Node,
};
use alloc::{boxed::Box, string::String, vec::Vec};
use core::{
    cmp::Ordering,
    fmt::{self, Debug},
    hash::{Hash, Hasher},
};

mod iterators;
pub use iterators::*;

/// An ordered set of strings based on a ternary search tree.
///
/// Each node of the tree stores a single character and links to three
/// subtrees: characters less than its own, the next character of the same
/// string, and characters greater than its own. Strings are split into
/// characters with [`str::chars`], so each Unicode scalar value takes one node,
/// and strings are ordered the same way as [`String`]'s [`Ord`] implementation.
///
/// The tree is never rebalanced, so the shape (and performance) depends on the
/// order of insertion. Inserting sorted strings gives the deepest tree, while
/// inserting the median first and then recursively the median of each half
/// gives the shallowest.
///
/// The number of stored strings is not cached; [`TernarySearchTree::size`]
/// counts them by traversing the whole tree.
///
/// # Examples
///
/// ```rust
/// use tstree::TernarySearchTree;
///
/// let mut tree = TernarySearchTree::new();
/// tree.insert("cat");
/// tree.insert("car");
/// tree.insert("dog");
///
/// assert_eq!(tree.size(), 3);
/// assert_eq!(tree.all_strings(), ["car", "cat", "dog"]);
/// assert!(!tree.search("ca", true));
/// assert!(tree.search("ca", false));
/// ```
pub struct TernarySearchTree {
    /// The root of the tree, if any non-empty string is stored.
    root: Option<Box<Node>>,
    /// `true` if the empty string is stored. It has no node representation.
    holds_empty: bool,
}

impl TernarySearchTree {
    /// Create a new, empty [`TernarySearchTree`].
    ///
    /// This function will not pre-allocate anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tstree::TernarySearchTree;
    ///
    /// let tree = TernarySearchTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.size(), 0);
    /// ```
    pub const fn new() -> Self {
        TernarySearchTree {
            root: None,
            holds_empty: false,
        }
    }

    /// Insert a string into the set.
    ///
    /// Returns `true` if the string was not already present. Inserting a string
    /// a second time leaves the tree unchanged. The empty string is a valid
    /// member of the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tstree::TernarySearchTree;
    ///
    /// let mut tree = TernarySearchTree::new();
    ///
    /// assert!(tree.insert("a"));
    /// assert!(!tree.insert("a"));
    /// assert!(tree.insert(""));
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn insert(&mut self, term: &str) -> bool {
        if term.is_empty() {
            let new_word = !self.holds_empty;
            self.holds_empty = true;
            return new_word;
        }

        let result = insert_term(&mut self.root, term);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            term,
            new_word = result.new_word,
            allocated_nodes = result.allocated_nodes,
            "inserted term"
        );

        result.new_word
    }

    /// Search the set for the given string.
    ///
    /// With `exact` set, this returns `true` only if the string itself was
    /// inserted. Otherwise it returns `true` if any stored string begins with
    /// the given one, that is, if every character can be matched along a path
    /// of the tree.
    ///
    /// For the empty string, an exact search checks whether the empty string
    /// was inserted, and a prefix search checks whether the set holds anything
    /// at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tstree::TernarySearchTree;
    ///
    /// let tree = TernarySearchTree::from(["word"]);
    ///
    /// assert!(tree.search("word", true));
    /// assert!(tree.search("wo", false));
    /// assert!(!tree.search("wo", true));
    /// assert!(!tree.search("woo", false));
    /// assert!(tree.search("", false));
    /// assert!(!tree.search("", true));
    /// ```
    pub fn search(&self, term: &str, exact: bool) -> bool {
        if exact {
            self.contains(term)
        } else {
            self.starts_with(term)
        }
    }

    /// Returns `true` if the given string was inserted into the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tstree::TernarySearchTree;
    ///
    /// let tree = TernarySearchTree::from(["ab", "abc"]);
    /// assert!(tree.contains("ab"));
    /// assert!(tree.contains("abc"));
    /// assert!(!tree.contains("a"));
    /// ```
    pub fn contains(&self, term: &str) -> bool {
        if term.is_empty() {
            return self.holds_empty;
        }

        contains_term(self.root.as_deref(), term)
    }

    /// Returns `true` if some string in the set begins with the given prefix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tstree::TernarySearchTree;
    ///
    /// let tree = TernarySearchTree::from(["ab", "abc"]);
    /// assert!(tree.starts_with("a"));
    /// assert!(tree.starts_with("abc"));
    /// assert!(!tree.starts_with("abcd"));
    /// ```
    pub fn starts_with(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return !self.is_empty();
        }

        contains_prefix(self.root.as_deref(), prefix)
    }

    /// Returns the number of strings in the set.
    ///
    /// This traverses the whole tree, so it takes time linear in the number of
    /// nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tstree::TernarySearchTree;
    ///
    /// let tree: TernarySearchTree = ["d", "c", "b", "a", "c"].into_iter().collect();
    /// assert_eq!(tree.size(), 4);
    /// ```
    pub fn size(&self) -> usize {
        WordCounter::count(self.root.as_deref()) + usize::from(self.holds_empty)
    }

    /// Returns the number of strings in the set.
    ///
    /// This is the same as [`TernarySearchTree::size`].
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the set contains no strings.
    ///
    /// Unlike [`TernarySearchTree::size`], this does not traverse the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tstree::TernarySearchTree;
    ///
    /// let mut tree = TernarySearchTree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert("");
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        // every node lies on the path of some stored string
        self.root.is_none() && !self.holds_empty
    }

    /// Returns every string in the set, in sorted order.
    ///
    /// Each call makes a fresh pass over the whole tree. Use
    /// [`TernarySearchTree::iter`] to walk the strings lazily.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tstree::TernarySearchTree;
    ///
    /// let tree = TernarySearchTree::from(["this", "list", "is", "not", "sorted"]);
    /// assert_eq!(tree.all_strings(), ["is", "list", "not", "sorted", "this"]);
    /// ```
    pub fn all_strings(&self) -> Vec<String> {
        self.iter().collect()
    }

    /// Gets an iterator over the strings of the set, in sorted order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tstree::TernarySearchTree;
    ///
    /// let tree = TernarySearchTree::from(["b", "", "a"]);
    /// let mut iter = tree.iter();
    ///
    /// assert_eq!(iter.next().as_deref(), Some(""));
    /// assert_eq!(iter.next().as_deref(), Some("a"));
    /// assert_eq!(iter.next().as_deref(), Some("b"));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref(), self.holds_empty)
    }

    /// Gets an iterator over the strings of the set that begin with the given
    /// prefix, in sorted order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tstree::TernarySearchTree;
    ///
    /// let tree = TernarySearchTree::from(["car", "cart", "cat", "dog"]);
    ///
    /// assert_eq!(tree.prefix("car").collect::<Vec<_>>(), ["car", "cart"]);
    /// assert_eq!(tree.prefix("cb").count(), 0);
    /// ```
    pub fn prefix(&self, prefix: &str) -> Prefix<'_> {
        Prefix::new(self.root.as_deref(), self.holds_empty, prefix)
    }

    /// Returns the smallest string in the set, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tstree::TernarySearchTree;
    ///
    /// let tree = TernarySearchTree::from(["b", "ab", "abc"]);
    /// assert_eq!(tree.first().as_deref(), Some("ab"));
    /// ```
    pub fn first(&self) -> Option<String> {
        if self.holds_empty {
            return Some(String::new());
        }

        minimum_word(self.root.as_deref())
    }

    /// Returns the largest string in the set, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tstree::TernarySearchTree;
    ///
    /// let tree = TernarySearchTree::from(["b", "ab", "abc"]);
    /// assert_eq!(tree.last().as_deref(), Some("b"));
    /// ```
    pub fn last(&self) -> Option<String> {
        match self.root.as_deref() {
            Some(root) => maximum_word(Some(root)),
            None => self.holds_empty.then(String::new),
        }
    }

    /// Clears the set, removing all strings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tstree::TernarySearchTree;
    ///
    /// let mut tree = TernarySearchTree::from(["a", ""]);
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert!(!tree.contains("a"));
    /// ```
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            deallocate_tree(root);
        }
        self.holds_empty = false;
    }

    /// Produce a multi-line textual depiction of every node in the tree, for
    /// debugging.
    ///
    /// See [`TextPrinter`] for the format. If the empty string is stored, the
    /// output starts with an extra line `"" *`, since it has no node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tstree::TernarySearchTree;
    ///
    /// let tree = TernarySearchTree::from(["ab", ""]);
    /// assert_eq!(tree.render(), "\"\" *\n0 'a'\n1 'b' * <- equal 0\n");
    /// ```
    pub fn render(&self) -> String {
        let nodes = TextPrinter::render(self.root.as_deref());

        if self.holds_empty {
            let mut output = String::from("\"\" *\n");
            output.push_str(&nodes);
            output
        } else {
            nodes
        }
    }

    /// Collect statistics about the shape of the tree.
    ///
    /// The empty string has no node, so it is not reflected in the stats.
    pub fn stats(&self) -> TreeStats {
        TreeStatsCollector::collect(self.root.as_deref())
    }

    /// Returns the root node of the tree, if any non-empty string is stored.
    ///
    /// This can be used with the [`visitor`](crate::visitor) module to inspect
    /// the tree.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }
}

impl Drop for TernarySearchTree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for TernarySearchTree {
    fn clone(&self) -> Self {
        TernarySearchTree {
            root: self.root.as_deref().map(clone_tree),
            holds_empty: self.holds_empty,
        }
    }
}

impl Debug for TernarySearchTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Default for TernarySearchTree {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for TernarySearchTree {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for term in iter {
            let _ = self.insert(term.as_ref());
        }
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for TernarySearchTree {
    fn from(arr: [S; N]) -> Self {
        let mut tree = TernarySearchTree::new();
        tree.extend(arr);
        tree
    }
}

impl<S: AsRef<str>> FromIterator<S> for TernarySearchTree {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut tree = TernarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl Hash for TernarySearchTree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut num_words = 0usize;
        for word in self.iter() {
            word.hash(state);
            num_words += 1;
        }
        state.write_usize(num_words);
    }
}

impl<'a> IntoIterator for &'a TernarySearchTree {
    type IntoIter = Iter<'a>;
    type Item = String;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Ord for TernarySearchTree {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl PartialOrd for TernarySearchTree {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for TernarySearchTree {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for TernarySearchTree {}

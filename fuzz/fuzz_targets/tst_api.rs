#![no_main]

use libfuzzer_sys::arbitrary::{self, Arbitrary};
use std::{
    collections::{hash_map::RandomState, BTreeSet},
    hash::BuildHasher,
};
use tstree::{visitor::WellFormedChecker, TernarySearchTree};

#[derive(Arbitrary, Debug)]
enum Action {
    Clear,
    Insert(String),
    Search { term: String, exact: bool },
    CheckSize,
    CheckAllStrings,
    GetFirst,
    GetLast,
    Prefix(String),
    Clone,
    Hash,
    Render,
}

libfuzzer_sys::fuzz_target!(|actions: Vec<Action>| {
    let mut tree = TernarySearchTree::new();
    let mut oracle = BTreeSet::<String>::new();

    for action in actions {
        match action {
            Action::Clear => {
                tree.clear();
                oracle.clear();
            },
            Action::Insert(term) => {
                assert_eq!(tree.insert(&term), oracle.insert(term));
            },
            Action::Search { term, exact } => {
                let expected = if exact {
                    oracle.contains(&term)
                } else {
                    oracle.iter().any(|word| word.starts_with(term.as_str()))
                };
                assert_eq!(tree.search(&term, exact), expected);
            },
            Action::CheckSize => {
                assert_eq!(tree.size(), oracle.len());
                assert_eq!(tree.is_empty(), oracle.is_empty());
            },
            Action::CheckAllStrings => {
                assert!(tree.all_strings().iter().eq(oracle.iter()));
            },
            Action::GetFirst => {
                assert_eq!(tree.first().as_ref(), oracle.first());
            },
            Action::GetLast => {
                assert_eq!(tree.last().as_ref(), oracle.last());
            },
            Action::Prefix(prefix) => {
                let expected = oracle
                    .iter()
                    .filter(|word| word.starts_with(prefix.as_str()));
                assert!(tree.prefix(&prefix).eq(expected.cloned()));
            },
            Action::Clone => {
                let tree_copy = tree.clone();
                assert!(tree_copy.iter().eq(tree.iter()));
                assert_eq!(tree_copy.render(), tree.render());
                tree = tree_copy;
            },
            Action::Hash => {
                let hash_builder = RandomState::new();
                let tree_copy = tree.clone();

                let original_hash = hash_builder.hash_one(&tree);
                let copy_hash = hash_builder.hash_one(&tree_copy);

                assert_eq!(original_hash, copy_hash, "{:?} != {:?}", tree, tree_copy);
            },
            Action::Render => {
                let rendered = tree.render();
                let num_lines = rendered.lines().count();
                let holds_empty = usize::from(oracle.contains(""));
                assert_eq!(num_lines, tree.stats().node_count + holds_empty);
            },
        }

        let num_words = WellFormedChecker::check(tree.root()).expect("tree should be well-formed");
        assert_eq!(num_words + usize::from(oracle.contains("")), oracle.len());
    }
});

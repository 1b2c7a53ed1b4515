use std::collections::BTreeSet;

use rand::{
    rngs::StdRng,
    seq::{IndexedRandom, SliceRandom},
    SeedableRng,
};
use tstree::{tests_common::median_order, TernarySearchTree};

/// The order in which keys are inserted into a tree.
///
/// The tree is never rebalanced, so the insertion order decides its depth.
#[derive(Debug, Clone, Copy)]
pub enum InsertionOrder {
    /// Median first, then recursively the median of each half
    Best,
    /// Shuffled with a fixed seed
    Average,
    /// Sorted
    Worst,
}

impl InsertionOrder {
    pub const ALL: [InsertionOrder; 3] = [
        InsertionOrder::Best,
        InsertionOrder::Average,
        InsertionOrder::Worst,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InsertionOrder::Best => "best",
            InsertionOrder::Average => "average",
            InsertionOrder::Worst => "worst",
        }
    }

    /// Reorder the given keys, which must already be sorted and deduplicated.
    pub fn arrange(self, sorted_keys: &[String]) -> Vec<String> {
        match self {
            InsertionOrder::Best => median_order(sorted_keys),
            InsertionOrder::Average => {
                let mut keys = sorted_keys.to_vec();
                keys.shuffle(&mut StdRng::seed_from_u64(69420));
                keys
            },
            InsertionOrder::Worst => sorted_keys.to_vec(),
        }
    }
}

/// A sorted list of exactly `count` distinct words, built from pseudo-random
/// syllables.
pub fn word_list(count: usize) -> Vec<String> {
    const SYLLABLES: [&str; 16] = [
        "ka", "to", "ri", "mu", "se", "na", "lo", "pe", "vi", "du", "ha", "zo", "qui", "bra",
        "ste", "ng",
    ];

    let mut rng = StdRng::seed_from_u64(1337);
    let mut words = BTreeSet::new();
    let mut index: u64 = 0;

    // different syllable sequences can spell the same word, so keep going until
    // enough distinct ones are found
    while words.len() < count {
        let mut word = String::new();
        let mut rest = index;
        loop {
            word.push_str(SYLLABLES[(rest % 16) as usize]);
            rest /= 16;
            if rest == 0 {
                break;
            }
        }
        if let Some(tail) = SYLLABLES.choose(&mut rng) {
            word.push('-');
            word.push_str(tail);
        }
        words.insert(word);
        index += 1;
    }

    words.into_iter().collect()
}

pub fn build_tree(keys: &[String]) -> TernarySearchTree {
    keys.iter().collect()
}

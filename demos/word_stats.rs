use argh::FromArgs;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::{
    error::Error,
    fs,
    path::PathBuf,
    time::{Duration, Instant},
};
use tstree::{
    tests_common::{generate_key_fixed_length, median_order},
    TernarySearchTree,
};

/// Compare the shape of trees built from the same words in different orders
#[derive(FromArgs)]
struct WordStats {
    /// input to read words from, split on whitespace
    #[argh(option)]
    input: Option<PathBuf>,

    /// number of generated words to use when no input is given
    #[argh(option, default = "10_000")]
    count: usize,

    /// seed for the shuffled insertion order
    #[argh(option, default = "69420")]
    seed: u64,
}

#[derive(Debug)]
#[allow(dead_code)] // this struct is used for its debug repr
struct OrderStats {
    order: &'static str,
    insert_time: Duration,
    search_time: Duration,
    node_count: usize,
    max_depth: usize,
    mean_depth: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args: WordStats = argh::from_env();

    let mut words = match &args.input {
        Some(path) => fs::read_to_string(path)?
            .split_whitespace()
            .map(String::from)
            .collect::<Vec<_>>(),
        None => generated_words(args.count),
    };
    words.sort();
    words.dedup();

    tracing::info!(num_words = words.len(), "loaded words");

    let mut shuffled = words.clone();
    shuffled.shuffle(&mut StdRng::seed_from_u64(args.seed));

    let orders = [
        ("best", median_order(&words)),
        ("average", shuffled),
        ("worst", words.clone()),
    ];

    for (order, ordered_words) in orders {
        let stats = measure(order, &ordered_words, &words)?;
        println!("{stats:#?}");
    }

    Ok(())
}

fn measure(
    order: &'static str,
    ordered_words: &[String],
    sorted_words: &[String],
) -> Result<OrderStats, Box<dyn Error>> {
    let start = Instant::now();
    let mut tree = TernarySearchTree::new();
    for word in ordered_words {
        tree.insert(word);
    }
    let insert_time = start.elapsed();

    let start = Instant::now();
    for word in sorted_words {
        if !tree.search(word, true) {
            return Err(format!("inserted word '{word}' was not found").into());
        }
    }
    let search_time = start.elapsed();

    if tree.all_strings() != sorted_words {
        return Err(format!("'{order}' tree does not list the words in sorted order").into());
    }

    let stats = tree.stats();
    tracing::debug!(order, %stats, "collected tree stats");

    Ok(OrderStats {
        order,
        insert_time,
        search_time,
        node_count: stats.node_count,
        max_depth: stats.max_depth,
        mean_depth: stats.mean_depth(),
    })
}

fn generated_words(count: usize) -> Vec<String> {
    // shortest length over a 10 letter alphabet that yields `count` words
    let mut len = 1;
    while 10usize.saturating_pow(len) < count {
        len += 1;
    }

    generate_key_fixed_length(len as usize, 10)
        .take(count)
        .collect()
}

use criterion::{criterion_group, BatchSize, Criterion, Throughput};
use tstree::{
    tests_common::{generate_key_fixed_length, generate_keys_skewed},
    TernarySearchTree,
};

use crate::common::{word_list, InsertionOrder};

fn gen_group(c: &mut Criterion, group: &str, sorted_keys: &[String]) {
    let mut group = c.benchmark_group(group);
    group.throughput(Throughput::Elements(sorted_keys.len() as u64));

    for order in InsertionOrder::ALL {
        let keys = order.arrange(sorted_keys);

        group.bench_function(order.name(), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut tree = TernarySearchTree::new();
                    for key in &keys {
                        tree.insert(key);
                    }
                    tree
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench(c: &mut Criterion) {
    let words = word_list(2_000);
    let fixed_length: Vec<_> = generate_key_fixed_length(4, 6).collect();
    let skewed: Vec<_> = generate_keys_skewed(u8::MAX as usize).collect();

    gen_group(c, "insert/words", &words);
    gen_group(c, "insert/fixed_length", &fixed_length);

    let mut group = c.benchmark_group("insert/skewed");
    group.bench_function("generated", |b| {
        b.iter_batched(
            || skewed.clone(),
            |keys| keys.into_iter().collect::<TernarySearchTree>(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(bench_insert_group, bench);

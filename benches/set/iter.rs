use std::hint::black_box;

use criterion::{criterion_group, Criterion};
use tstree::visitor::TreeStatsCollector;

use crate::common::{build_tree, word_list, InsertionOrder};

fn bench(c: &mut Criterion) {
    let words = word_list(5_000);

    let mut group = c.benchmark_group("iter/words");
    for order in InsertionOrder::ALL {
        let tree = build_tree(&order.arrange(&words));

        group.bench_function(format!("{}/all_strings", order.name()), |b| {
            b.iter(|| black_box(tree.all_strings()))
        });

        group.bench_function(format!("{}/size", order.name()), |b| {
            b.iter(|| black_box(tree.size()))
        });

        group.bench_function(format!("{}/prefix", order.name()), |b| {
            b.iter(|| {
                tree.prefix("ka").for_each(|word| {
                    black_box(word);
                })
            })
        });

        group.bench_function(format!("{}/stats", order.name()), |b| {
            b.iter(|| black_box(TreeStatsCollector::collect(tree.root())))
        });
    }
}

criterion_group!(bench_iter_group, bench);

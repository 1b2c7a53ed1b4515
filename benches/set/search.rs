use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use crate::common::{build_tree, word_list, InsertionOrder};

fn bench(c: &mut Criterion) {
    let words = word_list(2_000);
    let probes: Vec<_> = words.iter().step_by(7).cloned().collect();

    let mut group = c.benchmark_group("search/words");
    for order in InsertionOrder::ALL {
        let tree = build_tree(&order.arrange(&words));

        group.bench_function(format!("{}/exact", order.name()), |b| {
            b.iter(|| {
                for probe in &probes {
                    black_box(tree.search(probe, true));
                }
            })
        });

        group.bench_function(format!("{}/prefix", order.name()), |b| {
            b.iter(|| {
                for probe in &probes {
                    black_box(tree.search(&probe[..2], false));
                }
            })
        });

        group.bench_function(format!("{}/missing", order.name()), |b| {
            b.iter(|| {
                for probe in &probes {
                    black_box(tree.search(&probe[1..], true));
                }
            })
        });
    }
}

criterion_group!(bench_search_group, bench);

// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Solver benchmarks on grid graphs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kruskal::graph::Graph;
use kruskal::{Kruskal, Strategy};

/// `side x side` grid with deterministic pseudo-random weights
fn grid(side: u32) -> Graph<u32, u64> {
    let mut graph = Graph::new();
    let weight = |a: u32, b: u32| u64::from(a.wrapping_mul(2_654_435_761) ^ b) % 1000;

    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            if col + 1 < side {
                graph.insert_edge(id, id + 1, weight(id, id + 1));
            }
            if row + 1 < side {
                graph.insert_edge(id, id + side, weight(id, id + side));
            }
        }
    }
    graph
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("kruskal");

    for side in [16u32, 64] {
        let graph = grid(side);
        for strategy in [Strategy::UnionFind, Strategy::MembershipSets] {
            let solver = Kruskal::new().strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), side * side),
                &graph,
                |b, graph| b.iter(|| solver.run(black_box(graph))),
            );
        }
    }

    group.finish();
}

fn bench_deduplicate(c: &mut Criterion) {
    let graph = grid(64);
    let solver = Kruskal::new().deduplicate(true);
    c.bench_function("kruskal/dedup/4096", |b| b.iter(|| solver.run(black_box(&graph))));
}

criterion_group!(benches, bench_strategies, bench_deduplicate);
criterion_main!(benches);

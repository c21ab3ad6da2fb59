// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
//! Arbitrary edge lists must always solve to a spanning forest

#![no_main]

use arbitrary::Arbitrary;
use kruskal::graph::Graph;
use kruskal::Kruskal;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    directed: bool,
    deduplicate: bool,
    edges: Vec<(u8, u8, i32)>,
}

fuzz_target!(|input: Input| {
    let mut graph = Graph::with_direction(input.directed);
    graph.insert_edges(input.edges.iter().map(|&(u, v, w)| (u, v, i64::from(w))));

    let solution = Kruskal::new().deduplicate(input.deduplicate).run(&graph);
    let tree = solution.tree;

    assert_eq!(tree.edge_count(), tree.vertex_count() - tree.component_count());
    assert_eq!(tree.edge_count(), graph.vertex_count() - graph.component_count());
    assert_eq!(solution.stats.accepted, tree.edge_count());
});

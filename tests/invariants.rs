// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Invariant tests for the spanning forest solver
//!
//! These tests verify critical invariants:
//! 1. Undirected storage - every edge is retrievable in both orientations
//! 2. Acyclicity and spanning - a forest with |V| - components edges
//! 3. Minimality - total weight matches an independent MST
//! 4. Order independence - distinct weights give one tree for any insertion order
//! 5. The sample graph, with and without duplicate removal

use kruskal::commands::demo::sample_graph;
use kruskal::error::GraphError;
use kruskal::graph::Graph;
use kruskal::types::Edge;
use kruskal::{solve, Kruskal, SolveStats, Strategy as SolveStrategy};
use petgraph::data::Element;
use proptest::prelude::*;
use std::collections::BTreeSet;

// =============================================================================
// Test Helpers
// =============================================================================

/// Edges with endpoints in sorted order, for orientation-free comparison
fn unordered<V: Ord + Clone, W: Copy + Ord>(edges: &[Edge<V, W>]) -> BTreeSet<(V, V, W)> {
    edges
        .iter()
        .map(|e| {
            if e.source <= e.target {
                (e.source.clone(), e.target.clone(), e.weight)
            } else {
                (e.target.clone(), e.source.clone(), e.weight)
            }
        })
        .collect()
}

fn expected_sample_tree() -> BTreeSet<(&'static str, &'static str, i64)> {
    [
        ("A", "B", 2),
        ("D", "E", 2),
        ("B", "C", 4),
        ("A", "E", 4),
        ("E", "G", 5),
        ("F", "G", 5),
    ]
    .into_iter()
    .collect()
}

/// MST weight computed by petgraph, as an independent reference
fn reference_weight(graph: &Graph<u8, i64>) -> i64 {
    petgraph::algo::min_spanning_tree(&graph.to_petgraph())
        .filter_map(|element| match element {
            Element::Edge { weight, .. } => Some(weight),
            Element::Node { .. } => None,
        })
        .sum()
}

fn build(edges: &[(u8, u8, i64)]) -> Graph<u8, i64> {
    edges.iter().copied().collect()
}

fn arb_edges() -> impl Strategy<Value = Vec<(u8, u8, i64)>> {
    prop::collection::vec((0u8..8, 0u8..8, -5i64..20), 0..30)
}

/// Edge lists whose weights are all different, paired with a shuffled copy
fn arb_distinct_pair() -> impl Strategy<Value = (Vec<(u8, u8, i64)>, Vec<(u8, u8, i64)>)> {
    prop::collection::vec((0u8..8, 0u8..8), 1..25).prop_flat_map(|pairs| {
        let edges: Vec<_> = pairs
            .into_iter()
            .enumerate()
            .map(|(i, (u, v))| (u, v, i as i64 * 3 - 20))
            .collect();
        (Just(edges.clone()), Just(edges).prop_shuffle())
    })
}

// =============================================================================
// Sample Graph
// =============================================================================

#[test]
fn test_sample_tree_without_deduplication() {
    let solution = Kruskal::new().run(&sample_graph());

    assert_eq!(solution.tree.total_weight(), 22);
    assert_eq!(unordered(&solution.tree.logical_edges()), expected_sample_tree());
    assert_eq!(
        solution.stats,
        SolveStats {
            candidates: 18,
            duplicates_dropped: 0,
            accepted: 6,
            rejected: 9,
        }
    );
}

#[test]
fn test_sample_tree_with_deduplication() {
    let solution = Kruskal::new().deduplicate(true).run(&sample_graph());

    assert_eq!(solution.tree.total_weight(), 22);
    assert_eq!(unordered(&solution.tree.logical_edges()), expected_sample_tree());
    // The repeated (D, E, 2) and every mirrored copy are gone
    assert_eq!(
        solution.stats,
        SolveStats {
            candidates: 18,
            duplicates_dropped: 10,
            accepted: 6,
            rejected: 1,
        }
    );
}

#[test]
fn test_sample_repeated_edge_accepted_once() {
    let mst = solve(&sample_graph());
    let de = mst
        .logical_edges()
        .into_iter()
        .filter(|e| e.connects(&"D", &"E"))
        .count();
    assert_eq!(de, 1);
}

#[test]
fn test_sample_tree_with_membership_sets() {
    let solution = Kruskal::new()
        .strategy(SolveStrategy::MembershipSets)
        .run(&sample_graph());

    assert_eq!(solution.tree.total_weight(), 22);
    assert_eq!(unordered(&solution.tree.logical_edges()), expected_sample_tree());
}

// =============================================================================
// Graph Container
// =============================================================================

#[test]
fn test_undirected_edges_retrievable_both_ways() {
    let graph = sample_graph();
    let edges = graph.edges();

    for (u, v, w) in kruskal::commands::demo::sample_edges() {
        assert!(edges.contains(&Edge::new(u, v, w)), "missing {u} -> {v}");
        assert!(edges.contains(&Edge::new(v, u, w)), "missing {v} -> {u}");
    }
}

#[test]
fn test_unknown_vertex_lookup_fails() {
    let graph = sample_graph();
    assert!(matches!(
        graph.edges_from(&"Z"),
        Err(GraphError::VertexNotFound { .. })
    ));
}

// =============================================================================
// Forests
// =============================================================================

#[test]
fn test_disconnected_input_yields_forest() {
    let graph: Graph<&str, i32> = [
        ("A", "B", 1),
        ("B", "C", 2),
        ("C", "A", 3),
        ("X", "Y", 4),
        ("Y", "Z", 5),
        ("Z", "X", 6),
    ]
    .into_iter()
    .collect();

    let mst = solve(&graph);
    assert_eq!(mst.edge_count(), graph.vertex_count() - 2);
    assert_eq!(mst.component_count(), 2);
    assert_eq!(mst.total_weight(), 12);

    let left = ["A", "B", "C"];
    for edge in mst.logical_edges() {
        assert_eq!(left.contains(&edge.source), left.contains(&edge.target));
    }
}

#[test]
fn test_directed_input_still_produces_undirected_result() {
    let mut graph: Graph<&str, i32> = Graph::directed();
    graph.insert_edges([("A", "B", 1), ("B", "C", 2), ("C", "A", 3)]);

    let mst = solve(&graph);
    assert!(!mst.is_directed());
    assert_eq!(mst.edge_count(), 2);
    assert_eq!(mst.total_weight(), 3);
}

#[test]
fn test_total_weight_of_large_single_edge_does_not_overflow() {
    let graph: Graph<&str, i32> = [("A", "B", 1_500_000_000)].into_iter().collect();
    let mst = solve(&graph);

    assert_eq!(graph.total_weight(), 1_500_000_000);
    assert_eq!(mst.total_weight(), 1_500_000_000);
    assert_eq!(mst.report(), "(A, B, 1500000000)(B, A, 1500000000)\nCost: 1500000000\n");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_result_is_spanning_forest(edges in arb_edges()) {
        let graph = build(&edges);
        let mst = solve(&graph);

        // Acyclic: a forest has exactly |V| - components edges
        prop_assert_eq!(mst.edge_count(), mst.vertex_count() - mst.component_count());
        // Spanning: one tree per component of the input
        prop_assert_eq!(mst.edge_count(), graph.vertex_count() - graph.component_count());
    }

    #[test]
    fn prop_weight_matches_reference(edges in arb_edges()) {
        let graph = build(&edges);
        prop_assert_eq!(solve(&graph).total_weight(), reference_weight(&graph));
    }

    #[test]
    fn prop_deduplication_keeps_weight(edges in arb_edges()) {
        let graph = build(&edges);
        let plain = Kruskal::new().run(&graph);
        let deduped = Kruskal::new().deduplicate(true).run(&graph);

        prop_assert_eq!(plain.tree.total_weight(), deduped.tree.total_weight());
        prop_assert_eq!(plain.tree.edge_count(), deduped.tree.edge_count());
    }

    #[test]
    fn prop_distinct_weights_independent_of_order((edges, shuffled) in arb_distinct_pair()) {
        let first = solve(&build(&edges));
        let second = solve(&build(&shuffled));

        prop_assert_eq!(first.total_weight(), second.total_weight());
        prop_assert_eq!(
            unordered(&first.logical_edges()),
            unordered(&second.logical_edges())
        );
    }

    #[test]
    fn prop_undirected_storage_is_symmetric(edges in arb_edges()) {
        let graph = build(&edges);
        let stored = graph.edges();
        for &(u, v, w) in &edges {
            prop_assert!(stored.contains(&Edge::new(u, v, w)));
            prop_assert!(stored.contains(&Edge::new(v, u, w)));
        }
        prop_assert_eq!(stored.len(), edges.len() * 2);
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Minimum spanning tree via Kruskal's algorithm
//!
//! Edges are sorted by weight with a stable sort, so equal weights keep the
//! order in which [`Graph::edges`] enumerates them. Each edge is accepted
//! when its endpoints are not yet joined by previously accepted edges.
//!
//! Time: O(E log E) for sorting + O(E α(V)) for union-find.

use crate::graph::Graph;
use crate::types::{Edge, Vertex, Weight};
use crate::union_find::{DisjointSets, MembershipSets, UnionFind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// Cycle detection structure used while selecting edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Path-halving union-find with union by rank
    #[default]
    UnionFind,
    /// Per-vertex membership sets updated only for the two endpoints of an
    /// accepted edge; may accept cycle-closing edges
    MembershipSets,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnionFind => f.write_str("union-find"),
            Self::MembershipSets => f.write_str("membership-sets"),
        }
    }
}

/// Counters collected during a solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Edges enumerated from the input graph
    pub candidates: usize,
    /// Candidates removed as repeats of an earlier identical edge
    pub duplicates_dropped: usize,
    /// Edges accepted into the tree
    pub accepted: usize,
    /// Edges examined and rejected
    pub rejected: usize,
}

/// Result of a solve: the spanning forest and how it was reached
#[derive(Debug, Clone)]
pub struct Solution<V, W> {
    /// Accepted edges as a new undirected graph
    pub tree: Graph<V, W>,
    /// Counters
    pub stats: SolveStats,
}

/// Configurable Kruskal solver
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal {
    strategy: Strategy,
    deduplicate: bool,
}

impl Kruskal {
    /// Solver with the default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the cycle detection structure
    #[must_use]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Drop repeated `(u, v, weight)` candidates before sorting
    ///
    /// For undirected graphs `(v, u, weight)` counts as a repeat of
    /// `(u, v, weight)`.
    #[must_use]
    pub fn deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    /// Compute the minimum spanning forest of `graph`
    ///
    /// The input is only read. The algorithm assumes undirected semantics;
    /// a directed graph is processed anyway but the result is not
    /// guaranteed to be minimal.
    pub fn run<V: Vertex, W: Weight>(&self, graph: &Graph<V, W>) -> Solution<V, W> {
        if graph.is_directed() {
            warn!("Kruskal on a directed graph: result is not a well-defined spanning tree");
        }

        let mut stats = SolveStats::default();
        let mut candidates = graph.edges();
        stats.candidates = candidates.len();

        if self.deduplicate {
            let before = candidates.len();
            candidates = drop_duplicates(candidates, graph.is_directed());
            stats.duplicates_dropped = before - candidates.len();
        }

        candidates.sort_by(|a, b| a.weight.cmp_weight(&b.weight));

        let n = graph.vertex_count();
        let accepted = match self.strategy {
            // A forest on n vertices never has more than n - 1 edges
            Strategy::UnionFind => select(
                graph,
                candidates,
                UnionFind::new(n),
                Some(n.saturating_sub(1)),
                &mut stats,
            ),
            Strategy::MembershipSets => {
                select(graph, candidates, MembershipSets::new(n), None, &mut stats)
            }
        };

        let mut tree = Graph::new();
        tree.insert_edges(accepted.into_iter().map(Edge::into_triple));

        debug!(
            strategy = %self.strategy,
            vertices = n,
            candidates = stats.candidates,
            duplicates = stats.duplicates_dropped,
            accepted = stats.accepted,
            rejected = stats.rejected,
            "Kruskal finished"
        );

        Solution { tree, stats }
    }
}

/// Compute the minimum spanning tree (or forest) of `graph` with the
/// default options
#[must_use]
pub fn solve<V: Vertex, W: Weight>(graph: &Graph<V, W>) -> Graph<V, W> {
    Kruskal::new().run(graph).tree
}

/// Walk the sorted candidates, keeping edges that join two distinct groups
fn select<V, W, D>(
    graph: &Graph<V, W>,
    sorted: Vec<Edge<V, W>>,
    mut sets: D,
    limit: Option<usize>,
    stats: &mut SolveStats,
) -> Vec<Edge<V, W>>
where
    V: Vertex,
    W: Weight,
    D: DisjointSets,
{
    let mut accepted = Vec::new();

    for edge in sorted {
        if limit.is_some_and(|limit| accepted.len() >= limit) {
            break;
        }

        let (Some(u), Some(v)) = (graph.position(&edge.source), graph.position(&edge.target)) else {
            continue;
        };

        if sets.same_set(u, v) {
            trace!("reject {:?} -- {:?} ({})", edge.source, edge.target, edge.weight);
            stats.rejected += 1;
        } else {
            trace!("accept {:?} -- {:?} ({})", edge.source, edge.target, edge.weight);
            sets.union(u, v);
            stats.accepted += 1;
            accepted.push(edge);
        }
    }

    accepted
}

/// Keep the first occurrence of every `(u, v, weight)` candidate
fn drop_duplicates<V: Vertex, W: Weight>(edges: Vec<Edge<V, W>>, directed: bool) -> Vec<Edge<V, W>> {
    let mut seen: HashMap<(V, V), Vec<W>> = HashMap::new();
    let mut kept = Vec::with_capacity(edges.len());

    for edge in edges {
        let forward = (edge.source.clone(), edge.target.clone());
        let matches = |key: &(V, V)| {
            seen.get(key)
                .is_some_and(|weights| weights.iter().any(|w| w.cmp_weight(&edge.weight).is_eq()))
        };
        let duplicate = matches(&forward)
            || (!directed && matches(&(edge.target.clone(), edge.source.clone())));
        if duplicate {
            continue;
        }

        seen.entry(forward).or_default().push(edge.weight);
        kept.push(edge);
    }

    kept
}

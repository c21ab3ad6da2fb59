// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Weighted graph container used both as solver input and as its result

use crate::error::{GraphError, Result};
use crate::types::{Edge, Vertex, Weight};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::{HashMap, HashSet};

/// A weighted graph stored as adjacency lists
///
/// Storage is always directed. An undirected graph materialises every
/// inserted edge `(u, v, w)` as both `u -> v` and `v -> u`, so sums over
/// [`Graph::edges`] count each undirected edge twice.
///
/// Vertices exist only as edge endpoints and are enumerated in the order
/// they were first seen.
#[derive(Debug, Clone)]
pub struct Graph<V, W> {
    /// Whether edges are one-way
    directed: bool,
    /// Map from vertex to its slot in `adjacency`
    index: HashMap<V, usize>,
    /// Per-vertex `(neighbor, weight)` lists, in insertion order
    adjacency: Vec<(V, Vec<(V, W)>)>,
}

impl<V: Vertex, W: Weight> Default for Graph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, W: Weight> Graph<V, W> {
    /// Create a new empty undirected graph
    #[must_use]
    pub fn new() -> Self {
        Self::with_direction(false)
    }

    /// Create a new empty directed graph
    #[must_use]
    pub fn directed() -> Self {
        Self::with_direction(true)
    }

    /// Create a new empty graph with the given direction semantics
    #[must_use]
    pub fn with_direction(directed: bool) -> Self {
        Self {
            directed,
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Whether edges are one-way
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Slot of `vertex`, registering it with an empty list if unseen
    fn slot(&mut self, vertex: &V) -> usize {
        if let Some(&slot) = self.index.get(vertex) {
            return slot;
        }
        let slot = self.adjacency.len();
        self.index.insert(vertex.clone(), slot);
        self.adjacency.push((vertex.clone(), Vec::new()));
        slot
    }

    /// Add the edge `u -> v`, and `v -> u` as well when undirected
    ///
    /// Both endpoints are created on first use. Self-loops and repeated
    /// edges are kept as separate entries.
    pub fn insert_edge(&mut self, u: V, v: V, weight: W) {
        let u_slot = self.slot(&u);
        let v_slot = self.slot(&v);

        if self.directed {
            self.adjacency[u_slot].1.push((v, weight));
        } else {
            self.adjacency[u_slot].1.push((v.clone(), weight));
            self.adjacency[v_slot].1.push((u, weight));
        }
    }

    /// Insert every `(u, v, weight)` triple in order
    pub fn insert_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        for (u, v, weight) in edges {
            self.insert_edge(u, v, weight);
        }
    }

    /// The set of all known vertices
    #[must_use]
    pub fn vertices(&self) -> HashSet<&V> {
        self.index.keys().collect()
    }

    /// Vertices in enumeration order
    pub fn iter_vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.iter().map(|(v, _)| v)
    }

    /// Whether `vertex` has been an endpoint of any inserted edge
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Get vertex count
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Check if the graph has no vertices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Enumeration position of `vertex`
    pub(crate) fn position(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Every stored edge, grouped by source vertex in enumeration order
    ///
    /// Undirected graphs yield both orientations of each inserted edge.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge<V, W>> {
        self.adjacency
            .iter()
            .flat_map(|(source, list)| {
                list.iter()
                    .map(move |(target, weight)| Edge::new(source.clone(), target.clone(), *weight))
            })
            .collect()
    }

    /// Edges leaving `source`, in insertion order
    pub fn edges_from(&self, source: &V) -> Result<Vec<Edge<V, W>>> {
        let slot = self.position(source).ok_or_else(|| GraphError::VertexNotFound {
            vertex: format!("{source:?}"),
        })?;

        let (source, list) = &self.adjacency[slot];
        Ok(list
            .iter()
            .map(|(target, weight)| Edge::new(source.clone(), target.clone(), *weight))
            .collect())
    }

    /// Each inserted edge exactly once
    ///
    /// For undirected graphs the mirrored copy is skipped and the edge is
    /// oriented from the earlier-enumerated endpoint.
    #[must_use]
    pub fn logical_edges(&self) -> Vec<Edge<V, W>> {
        if self.directed {
            return self.edges();
        }

        let mut edges = Vec::with_capacity(self.edge_count());
        for (slot, (source, list)) in self.adjacency.iter().enumerate() {
            // An undirected self-loop sits twice in its own list
            let mut loops_seen = 0usize;
            for (target, weight) in list {
                let target_slot = self.index[target];
                let keep = match target_slot.cmp(&slot) {
                    std::cmp::Ordering::Greater => true,
                    std::cmp::Ordering::Equal => {
                        loops_seen += 1;
                        loops_seen % 2 == 1
                    }
                    std::cmp::Ordering::Less => false,
                };
                if keep {
                    edges.push(Edge::new(source.clone(), target.clone(), *weight));
                }
            }
        }
        edges
    }

    /// Number of inserted edges (mirrored copies not counted)
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let stored: usize = self.adjacency.iter().map(|(_, list)| list.len()).sum();
        if self.directed {
            stored
        } else {
            stored / 2
        }
    }

    /// Sum of the weights of every inserted edge
    ///
    /// Mirrored copies of undirected edges are not counted, so the running
    /// sum never exceeds the reported total.
    #[must_use]
    pub fn total_weight(&self) -> W {
        self.logical_edges()
            .into_iter()
            .fold(W::zero(), |acc, edge| acc + edge.weight)
    }

    /// Build an undirected petgraph view with one edge per inserted edge
    #[must_use]
    pub fn to_petgraph(&self) -> UnGraph<V, W> {
        let mut graph = UnGraph::with_capacity(self.vertex_count(), self.edge_count());
        let nodes: Vec<NodeIndex> = self
            .iter_vertices()
            .map(|v| graph.add_node(v.clone()))
            .collect();

        for edge in self.logical_edges() {
            let from = nodes[self.index[&edge.source]];
            let to = nodes[self.index[&edge.target]];
            graph.add_edge(from, to, edge.weight);
        }
        graph
    }

    /// Number of connected components, ignoring edge direction
    #[must_use]
    pub fn component_count(&self) -> usize {
        petgraph::algo::connected_components(&self.to_petgraph())
    }
}

impl<V: Vertex, W: Weight> Extend<(V, V, W)> for Graph<V, W> {
    fn extend<I: IntoIterator<Item = (V, V, W)>>(&mut self, iter: I) {
        self.insert_edges(iter);
    }
}

impl<V: Vertex, W: Weight> FromIterator<(V, V, W)> for Graph<V, W> {
    /// Collect triples into an undirected graph
    fn from_iter<I: IntoIterator<Item = (V, V, W)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.insert_edges(iter);
        graph
    }
}

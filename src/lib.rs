// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Kruskal library - minimum spanning trees and forests
//!
//! This crate provides a weighted graph container and Kruskal's greedy
//! edge-selection algorithm for computing a minimum spanning tree (or a
//! minimum spanning forest when the input is disconnected).
//!
//! ```
//! use kruskal::graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.insert_edges([("A", "B", 2), ("B", "C", 4), ("A", "C", 5)]);
//!
//! let mst = kruskal::solve(&graph);
//! assert_eq!(mst.edge_count(), 2);
//! assert_eq!(mst.total_weight(), 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod graph;
pub mod kruskal;
pub mod report;
pub mod union_find;

pub use crate::kruskal::{solve, Kruskal, Solution, SolveStats, Strategy};

/// Core vertex, weight and edge types shared by the graph and the solver
pub mod types {
    use serde::{Deserialize, Serialize};
    use std::cmp::Ordering;
    use std::fmt::{Debug, Display};
    use std::hash::Hash;
    use std::ops::Add;

    // =========================================================================
    // Vertex
    // =========================================================================

    /// Anything usable as a vertex identifier
    pub trait Vertex: Clone + Eq + Hash + Debug {}

    impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

    // =========================================================================
    // Weight
    // =========================================================================

    /// Numeric edge weight
    ///
    /// `cmp_weight` must be a total order: the solver sorts with it, so
    /// floating point weights compare with `total_cmp` and a NaN sorts last
    /// instead of poisoning the sort.
    pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Debug + Display {
        /// Additive identity
        fn zero() -> Self;

        /// Total ordering between two weights
        fn cmp_weight(&self, other: &Self) -> Ordering;
    }

    macro_rules! impl_integer_weight {
        ($($t:ty),*) => {
            $(
                impl Weight for $t {
                    fn zero() -> Self {
                        0
                    }

                    fn cmp_weight(&self, other: &Self) -> Ordering {
                        self.cmp(other)
                    }
                }
            )*
        };
    }

    macro_rules! impl_float_weight {
        ($($t:ty),*) => {
            $(
                impl Weight for $t {
                    fn zero() -> Self {
                        0.0
                    }

                    fn cmp_weight(&self, other: &Self) -> Ordering {
                        self.total_cmp(other)
                    }
                }
            )*
        };
    }

    impl_integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
    impl_float_weight!(f32, f64);

    // =========================================================================
    // Edge
    // =========================================================================

    /// A weighted edge `source -> target`
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Edge<V, W> {
        /// Source vertex
        pub source: V,
        /// Destination vertex
        pub target: V,
        /// Edge weight (may be zero or negative)
        pub weight: W,
    }

    impl<V, W> Edge<V, W> {
        /// Create an edge
        pub fn new(source: V, target: V, weight: W) -> Self {
            Self { source, target, weight }
        }

        /// The same edge pointing the other way
        #[must_use]
        pub fn reversed(self) -> Self {
            Self {
                source: self.target,
                target: self.source,
                weight: self.weight,
            }
        }

        /// Unpack into a `(source, target, weight)` triple
        pub fn into_triple(self) -> (V, V, W) {
            (self.source, self.target, self.weight)
        }
    }

    impl<V: PartialEq, W> Edge<V, W> {
        /// Whether this edge joins `a` and `b`, in either direction
        pub fn connects(&self, a: &V, b: &V) -> bool {
            (self.source == *a && self.target == *b) || (self.source == *b && self.target == *a)
        }

        /// Whether both endpoints are the same vertex
        pub fn is_self_loop(&self) -> bool {
            self.source == self.target
        }
    }

    impl<V, W> From<(V, V, W)> for Edge<V, W> {
        fn from((source, target, weight): (V, V, W)) -> Self {
            Self::new(source, target, weight)
        }
    }

}

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::{GraphError, Result};
    pub use crate::graph::Graph;
    pub use crate::kruskal::{solve, Kruskal, Solution, SolveStats, Strategy};
    pub use crate::types::{Edge, Vertex, Weight};
}

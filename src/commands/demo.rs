// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Demo command - solves the built-in sample graph

use crate::config::Config;
use crate::graph::Graph;
use anyhow::Result;
use tracing::info;

/// Sample graph with a repeated `(D, E, 2)` edge and several equal weights
#[must_use]
pub fn sample_edges() -> Vec<(&'static str, &'static str, i64)> {
    vec![
        ("A", "B", 2),
        ("B", "C", 4),
        ("A", "E", 4),
        ("C", "E", 5),
        ("D", "E", 2),
        ("D", "E", 2),
        ("E", "G", 5),
        ("F", "G", 5),
        ("C", "F", 10),
    ]
}

/// Undirected graph built from [`sample_edges`]
#[must_use]
pub fn sample_graph() -> Graph<&'static str, i64> {
    sample_edges().into_iter().collect()
}

/// Run the demo command
pub fn run(config: &Config, stats: bool) -> Result<()> {
    let graph = sample_graph();
    info!(
        "Solving sample graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let solution = config.solver().run(&graph);
    super::print_solution(&solution, config, stats)
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Solve command - builds a graph from `--edge` arguments and prints its MST

use crate::config::Config;
use crate::graph::Graph;
use anyhow::Result;
use tracing::info;

/// Parse a `U,V,W` edge argument
pub fn parse_edge(s: &str) -> std::result::Result<(String, String, f64), String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [u, v, w] = parts.as_slice() else {
        return Err(format!("expected U,V,WEIGHT but got '{s}'"));
    };
    if u.is_empty() || v.is_empty() {
        return Err(format!("empty vertex name in '{s}'"));
    }
    let weight = w
        .parse::<f64>()
        .map_err(|e| format!("invalid weight '{w}': {e}"))?;
    Ok(((*u).to_string(), (*v).to_string(), weight))
}

/// Run the solve command
pub fn run(edges: Vec<(String, String, f64)>, directed: bool, config: &Config, stats: bool) -> Result<()> {
    let mut graph = Graph::with_direction(directed);
    graph.insert_edges(edges);
    info!(
        "Solving graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let solution = config.solver().run(&graph);
    super::print_solution(&solution, config, stats)
}

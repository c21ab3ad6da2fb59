// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Human-readable and exchange renderings of a graph

use crate::graph::Graph;
use crate::types::{Edge, Vertex, Weight};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::{Display, Write as _};
use std::io::Write as _;

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Edge list and total cost
    #[default]
    Text,
    /// Graphviz DOT format
    Dot,
    /// JSON format
    Json,
}

/// JSON shape of a graph
#[derive(Serialize)]
struct GraphDocument<'a, V, W> {
    directed: bool,
    vertices: Vec<&'a V>,
    edges: Vec<Edge<V, W>>,
    total_weight: W,
}

impl<V, W> Graph<V, W>
where
    V: Vertex + Display,
    W: Weight,
{
    /// Every stored edge as `(u, v, w)` on one line, then the total cost
    ///
    /// Undirected graphs list both orientations of each edge; the cost is
    /// still the weight of each edge counted once.
    #[must_use]
    pub fn report(&self) -> String {
        self.report_with(false)
    }

    /// [`Graph::report`], optionally colouring the cost
    #[must_use]
    pub fn report_with(&self, color: bool) -> String {
        let mut out = String::new();
        for edge in self.edges() {
            let _ = write!(out, "({}, {}, {})", edge.source, edge.target, edge.weight);
        }
        out.push('\n');

        let total = self.total_weight();
        if color {
            let _ = writeln!(out, "Cost: {}", total.green().bold());
        } else {
            let _ = writeln!(out, "Cost: {total}");
        }
        out
    }

    /// Write [`Graph::report`] to stdout
    pub fn print_report(&self) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(self.report().as_bytes())
            .context("Failed to write report")?;
        Ok(())
    }

    /// Export to DOT format for Graphviz
    #[must_use]
    pub fn to_dot(&self) -> String {
        let (keyword, arrow) = if self.is_directed() {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        let mut dot = format!("{keyword} mst {{\n");
        for vertex in self.iter_vertices() {
            let _ = writeln!(dot, "  \"{}\";", dot_escape(vertex));
        }
        for edge in self.logical_edges() {
            let _ = writeln!(
                dot,
                "  \"{}\" {arrow} \"{}\" [label=\"{}\"];",
                dot_escape(&edge.source),
                dot_escape(&edge.target),
                dot_escape(&edge.weight)
            );
        }
        dot.push_str("}\n");
        dot
    }

    /// Render in `format`
    pub fn render(&self, format: OutputFormat, color: bool) -> Result<String>
    where
        V: Serialize,
        W: Serialize,
    {
        match format {
            OutputFormat::Text => Ok(self.report_with(color)),
            OutputFormat::Dot => Ok(self.to_dot()),
            OutputFormat::Json => self.to_json(),
        }
    }
}

impl<V, W> Graph<V, W>
where
    V: Vertex + Serialize,
    W: Weight + Serialize,
{
    /// Export to JSON
    pub fn to_json(&self) -> Result<String> {
        let document = GraphDocument {
            directed: self.is_directed(),
            vertices: self.iter_vertices().collect(),
            edges: self.logical_edges(),
            total_weight: self.total_weight(),
        };
        serde_json::to_string_pretty(&document).context("Failed to serialize graph to JSON")
    }
}

/// Quote-safe form of `value` for a DOT double-quoted ID
fn dot_escape(value: &impl Display) -> String {
    value.to_string().replace('\\', "\\\\").replace('"', "\\\"")
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod config;
pub mod demo;
pub mod solve;

use crate::config::Config;
use crate::kruskal::Solution;
use crate::types::{Vertex, Weight};
use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

/// Print a solved tree in the configured format, with counters on stderr
/// when `stats` is set
pub(crate) fn print_solution<V, W>(solution: &Solution<V, W>, config: &Config, stats: bool) -> Result<()>
where
    V: Vertex + Display + Serialize,
    W: Weight + Serialize,
{
    let content = solution.tree.render(config.format, config.color)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }

    if stats {
        let s = &solution.stats;
        eprintln!(
            "candidates: {}  duplicates dropped: {}  accepted: {}  rejected: {}  components: {}",
            s.candidates,
            s.duplicates_dropped,
            s.accepted,
            s.rejected,
            solution.tree.component_count()
        );
    }

    Ok(())
}

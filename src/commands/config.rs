// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Config command - shows the effective configuration

use crate::config::{default_path, Config};
use anyhow::Result;

/// Print the effective configuration as TOML
pub fn run(config: &Config) -> Result<()> {
    if let Some(path) = default_path() {
        println!("# default file: {}", path.display());
    }
    print!("{}", config.to_toml()?);
    Ok(())
}

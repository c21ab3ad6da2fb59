// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Layers, lowest priority first: built-in defaults, a TOML file, then
//! `KRUSKAL_*` environment variables. Command-line flags are applied on top
//! by the caller.

use crate::kruskal::{Kruskal, Strategy};
use crate::report::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cycle detection structure
    pub strategy: Strategy,
    /// Drop repeated candidate edges before sorting
    pub deduplicate: bool,
    /// Default output format
    pub format: OutputFormat,
    /// Colour terminal output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            deduplicate: false,
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl Config {
    /// Solver configured from these settings
    #[must_use]
    pub fn solver(&self) -> Kruskal {
        Kruskal::new()
            .strategy(self.strategy)
            .deduplicate(self.deduplicate)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// Default config file location
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "hyperpolymath", "kruskal")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration from `path` (or the default location) and the
/// environment
///
/// An explicit `path` must exist; the default location is optional.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let mut builder = config::Config::builder();

    match path {
        Some(path) => {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        None => {
            if let Some(default) = default_path() {
                builder = builder.add_source(config::File::from(default).required(false));
            }
        }
    }

    let settings = builder
        .add_source(config::Environment::with_prefix("KRUSKAL").try_parsing(true))
        .build()
        .context("Failed to load configuration")?;

    let config: Config = settings
        .try_deserialize()
        .context("Invalid configuration")?;
    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}

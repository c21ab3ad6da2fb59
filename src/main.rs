// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Kruskal CLI - minimum spanning trees from the command line

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use kruskal::commands;
use kruskal::config::{self, Config};
use kruskal::report::OutputFormat;
use kruskal::Strategy;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kruskal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "KRUSKAL_CONFIG", global = true)]
    config: Option<std::path::PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the solving commands
#[derive(Args)]
struct SolveArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Cycle detection structure
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Drop repeated edges before sorting
    #[arg(long)]
    dedup: bool,

    /// Print solver counters to stderr
    #[arg(long)]
    stats: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the built-in sample graph
    Demo {
        #[command(flatten)]
        args: SolveArgs,
    },

    /// Solve a graph given as edge arguments
    Solve {
        /// Edge as U,V,WEIGHT (repeatable)
        #[arg(short, long = "edge", value_parser = commands::solve::parse_edge, required = true)]
        edges: Vec<(String, String, f64)>,

        /// Treat edges as one-way
        #[arg(long)]
        directed: bool,

        #[command(flatten)]
        args: SolveArgs,
    },

    /// Show the effective configuration
    Config,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

/// Apply command-line overrides on top of the loaded configuration
fn merge(mut config: Config, args: &SolveArgs) -> Config {
    if let Some(format) = args.format {
        config.format = format;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if args.dedup {
        config.deduplicate = true;
    }
    config
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(log_level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = config::load(cli.config.as_deref())?;
    if cli.no_color || !std::io::stdout().is_terminal() {
        config.color = false;
    }

    // Execute command
    match cli.command {
        Commands::Demo { args } => {
            let stats = args.stats;
            commands::demo::run(&merge(config, &args), stats)
        }
        Commands::Solve { edges, directed, args } => {
            let stats = args.stats;
            commands::solve::run(edges, directed, &merge(config, &args), stats)
        }
        Commands::Config => commands::config::run(&config),
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}

//! # queens CLI
//!
//! Command-line front end for Queens Nav - a three-view puzzle app driven
//! by a hash-history router.
//!
//! ## Usage
//!
//! - `queens` - Start an interactive navigation session
//! - `queens navigate /queens` - Navigate once and render the page
//! - `queens routes` - Show the route table
//! - `queens generate --json` - Generate a Queens puzzle

use anyhow::Result;
use clap::{Parser, Subcommand};
use queens_core::HistoryStrategy;
use std::path::PathBuf;

mod commands;
mod config;
mod output;
mod pages;

use commands::{generate_command, interactive_command, navigate_command, routes_command};
use config::CliConfigLoader;

/// queens - Navigate the Queens puzzle app from a terminal
#[derive(Parser)]
#[command(name = "queens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Navigate the Queens puzzle app from a terminal")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// History strategy (hash, path, memory)
    #[arg(long, global = true)]
    history: Option<HistoryStrategy>,

    /// Queens board size
    #[arg(long, global = true)]
    size: Option<usize>,

    /// Seed for reproducible puzzles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Ignore QUEENS_* environment variables
    #[arg(long, global = true)]
    no_env: bool,

    /// Disable ANSI colours
    #[arg(long, global = true)]
    plain: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Navigate to a path and render the activated page
    Navigate {
        /// Path to navigate to, e.g. /queens
        path: String,
    },

    /// Show the route table
    Routes,

    /// Generate a Queens puzzle
    Generate {
        /// Print the puzzle as JSON
        #[arg(long)]
        json: bool,

        /// Mark the solution on the board
        #[arg(long)]
        reveal: bool,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(history) = cli.history {
        loader = loader.with_history_override(history);
    }

    if let Some(size) = cli.size {
        loader = loader.with_grid_size_override(size);
    }

    if let Some(seed) = cli.seed {
        loader = loader.with_seed_override(seed);
    }

    if cli.no_env {
        loader = loader.without_env();
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over --verbose
    if std::env::var_os("RUST_LOG").is_some() {
        queens_core::init_tracing();
    } else {
        queens_core::init_tracing_with_debug(cli.verbose);
    }

    let config_loader = build_config_loader(&cli);
    let colour = !cli.plain;

    match cli.command {
        Some(Commands::Navigate { path }) => navigate_command(path, config_loader, colour).await,
        Some(Commands::Routes) => routes_command(config_loader).await,
        Some(Commands::Generate { json, reveal }) => {
            generate_command(config_loader, json, reveal, colour).await
        }
        // Default to interactive mode
        None => interactive_command(config_loader, colour).await,
    }
}

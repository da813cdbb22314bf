//! Warehouse Graph Builder - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `wgb build` | Resolve the App and print the wired tree, shuttles and connections |
//! | `wgb inspect [--json]` | Print scopes, bindings and aggregators without resolving |

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use wgb::infrastructure::config::ConfigLoader;
use wgb::infrastructure::logging::init_logging;
use wgb::report::{build_report, inspect_report};

/// Command line interface for the warehouse graph builder
#[derive(Parser, Debug)]
#[command(name = "wgb")]
#[command(about = "Warehouse graph builder - wire aisles, shuttles and connections")]
#[command(version, propagate_version = true)]
struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the object graph and print the resolved App
    Build,

    /// Print the binding table without resolving anything
    Inspect {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(config.logging.clone()).context("Failed to initialize logging")?;
    debug!(command = ?cli.command, "Dispatching");

    let output = match cli.command {
        Commands::Build => build_report(&config).context("Failed to build object graph")?,
        Commands::Inspect { json } => {
            inspect_report(&config, json).context("Failed to inspect object graph")?
        }
    };
    print!("{output}");
    Ok(())
}

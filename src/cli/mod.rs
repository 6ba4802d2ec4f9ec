//! CLI argument parsing for pathfinder
//!
//! Uses clap for argument parsing.
//! Supports global flags: --root, --config, --map, --format, --quiet, --verbose

pub mod format;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Pathfinder - shortest paths and spanning trees over map graphs
#[derive(Parser, Debug)]
#[command(name = "pathfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving config and map files
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit config file
    #[arg(long, global = true, env = "PATHFINDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Map name (looked up in the data directory) or path to a map file
    #[arg(long, short, global = true)]
    pub map: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default pathfinder.toml under the root
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Summarize the loaded map
    Show,

    /// Find the minimum-cost path between two nodes
    Path {
        /// Starting node name
        from: String,

        /// Destination node name
        to: String,
    },

    /// Build the minimum spanning tree (a forest if the map is disconnected)
    Span,
}

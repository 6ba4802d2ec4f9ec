//! Command dispatch logic for pathfinder
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use pathfinder_core::config::PathfinderConfig;
use pathfinder_core::error::Result;
use pathfinder_core::graph::Graph;
use pathfinder_core::map;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // Determine the root directory
    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    tracing::debug!(elapsed = ?start.elapsed(), root = %root.display(), "resolve_root");

    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Init { force }) => commands::init::execute(cli, &root, *force),

        Some(Commands::Show) => {
            let graph = load_map(cli, &root, start)?;
            commands::show::execute(cli, &graph)
        }

        Some(Commands::Path { from, to }) => {
            let graph = load_map(cli, &root, start)?;
            commands::path::execute(cli, &graph, from, to)
        }

        Some(Commands::Span) => {
            let graph = load_map(cli, &root, start)?;
            commands::span::execute(cli, &graph)
        }
    }
}

fn handle_no_command() -> Result<()> {
    println!("pathfinder {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Shortest paths and minimum spanning trees over map graphs.");
    println!();
    println!("Run `pathfinder --help` for usage information.");
    Ok(())
}

/// Resolve the effective config and load the selected map into a graph
fn load_map(cli: &Cli, root: &Path, start: Instant) -> Result<Graph> {
    let config = PathfinderConfig::discover(root, cli.config.as_deref())?;
    let path = config.resolve_map_path(root, cli.map.as_deref());
    tracing::debug!(elapsed = ?start.elapsed(), map = %path.display(), "resolve_map");

    let graph = map::load_graph(&path)?;
    tracing::debug!(
        elapsed = ?start.elapsed(),
        nodes = graph.node_count(),
        arcs = graph.arc_count(),
        "load_map"
    );
    Ok(graph)
}

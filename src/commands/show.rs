//! `pathfinder show` command - summarize the loaded map

use crate::cli::Cli;
use pathfinder_core::error::Result;
use pathfinder_core::graph::{Graph, MapSummary};

/// Execute the show command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    let summary = MapSummary::new(graph);

    crate::output_by_format!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        },
        human => {
            output_human(cli, &summary);
        }
    );

    Ok(())
}

fn output_human(cli: &Cli, summary: &MapSummary) {
    if let Some(image) = &summary.image {
        println!("Map image: {}", image);
    }
    println!("Nodes: {}", summary.node_count);
    println!("Arcs: {} ({} edges)", summary.arc_count, summary.arc_count / 2);

    if cli.quiet {
        return;
    }

    println!();
    for node in &summary.nodes {
        println!(
            "  {} at ({}, {}), {} arcs",
            node.name, node.x, node.y, node.degree
        );
    }
}

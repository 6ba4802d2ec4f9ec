//! `pathfinder span` command - minimum spanning tree of the map

use crate::cli::Cli;
use pathfinder_core::error::Result;
use pathfinder_core::graph::{kruskal_spanning_forest, Graph, SpanningReport};

/// Execute the span command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    let forest = kruskal_spanning_forest(graph);
    let report = SpanningReport::new(graph, &forest);

    crate::output_by_format!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        },
        human => {
            output_human(cli, &report);
        }
    );

    Ok(())
}

fn output_human(cli: &Cli, report: &SpanningReport) {
    if !cli.quiet {
        for arc in &report.arcs {
            println!("{} -> {} ({})", arc.start, arc.finish, arc.cost);
        }
        println!();
    }

    if report.component_count <= 1 {
        println!(
            "The total cost of this spanning tree is: {}",
            report.total_cost
        );
    } else {
        println!(
            "The total cost of this spanning forest is: {}",
            report.total_cost
        );
        println!("Components: {}", report.component_count);
    }
}

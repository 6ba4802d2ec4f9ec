//! `pathfinder path` command - minimum-cost path between two nodes

use crate::cli::Cli;
use pathfinder_core::error::Result;
use pathfinder_core::graph::{dijkstra_search, Graph, PathReport, ShortestPath};

/// Execute the path command
pub fn execute(cli: &Cli, graph: &Graph, from: &str, to: &str) -> Result<()> {
    let start = graph.require_node(from)?;
    let finish = graph.require_node(to)?;

    let result = dijkstra_search(graph, start, finish)?;
    tracing::debug!(from, to, found = result.is_found(), "path search complete");

    crate::output_by_format!(cli.format,
        json => {
            let report = PathReport::new(graph, start, finish, &result);
            println!("{}", serde_json::to_string_pretty(&report)?);
        },
        human => {
            output_human(graph, from, &result);
        }
    );

    Ok(())
}

fn output_human(graph: &Graph, from: &str, result: &ShortestPath) {
    match result {
        ShortestPath::Found(path) => {
            print!("{}", path.render(graph));
            println!();
            println!("The total cost of this path is: {}", path.total_cost());
        }
        ShortestPath::SameNode => {
            println!("Start and finish are both {}; the path is empty.", from);
        }
        ShortestPath::Unreachable => {
            println!("No path found.");
        }
    }
}

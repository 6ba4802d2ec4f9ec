//! Graph model and path-finding operations
//!
//! Provides the engine behind the pathfinder tools:
//! - Arena-backed graph of named nodes and costed arcs
//! - `Path` values accumulating arcs, cost and visited nodes
//! - Dijkstra search for minimum-cost paths
//! - Kruskal construction of minimum spanning trees
//! - Graph provider trait consumed by the algorithms

pub mod algos;
pub mod model;
pub mod path;
pub mod report;
pub mod traversal;
pub mod types;

pub use algos::{
    dijkstra_search, find_shortest_path, kruskal_spanning_forest, Partition, ShortestPath,
    SpanningForest,
};
pub use model::Graph;
pub use path::Path;
pub use report::{ArcReport, MapSummary, NodeReport, PathOutcome, PathReport, SpanningReport};
pub use traversal::GraphProvider;
pub use types::{Arc, ArcId, Location, Node, NodeId};

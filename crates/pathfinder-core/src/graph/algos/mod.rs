//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dijkstra`: Minimum-cost path between two nodes
//! - `kruskal`: Minimum spanning tree (forest for disconnected graphs)
//! - `partition`: Union-find over connected components

pub mod dijkstra;
pub mod kruskal;
pub mod partition;

pub use dijkstra::{dijkstra_search, find_shortest_path, ShortestPath};
pub use kruskal::{kruskal_spanning_forest, SpanningForest};
pub use partition::Partition;

//! Map documents: the node and arc description a graph is built from
//!
//! A map lists named nodes with their image coordinates and undirected
//! arcs with their costs. Documents are TOML unless the file extension
//! says `json`:
//!
//! ```toml
//! image = "usa.png"
//!
//! [[nodes]]
//! name = "Denver"
//! x = 210.0
//! y = 180.0
//!
//! [[arcs]]
//! start = "Denver"
//! finish = "Omaha"
//! cost = 540.0
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PathfinderError, Result};
use crate::graph::{Graph, Location};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// One undirected edge; becomes a pair of opposite arcs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcSpec {
    pub start: String,
    pub finish: String,
    pub cost: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    /// Background image for the map, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub nodes: Vec<NodeSpec>,

    #[serde(default)]
    pub arcs: Vec<ArcSpec>,
}

impl MapDocument {
    /// Read a map document, choosing the format by extension
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PathfinderError::MapNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let document = if is_json(path) {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        tracing::debug!(path = %path.display(), "map loaded");
        Ok(document)
    }

    /// Write a map document, choosing the format by extension
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self).map_err(|e| {
                PathfinderError::Other(format!("failed to serialize map: {}", e))
            })?
        };
        fs::write(path, content)?;
        Ok(())
    }

    /// Build a graph, adding both directions of every arc.
    ///
    /// Rejects duplicate node names, unknown arc endpoints and costs that
    /// are negative or not finite.
    pub fn into_graph(self) -> Result<Graph> {
        let mut graph = match self.image {
            Some(image) => Graph::with_image(image),
            None => Graph::new(),
        };

        for node in self.nodes {
            graph.add_node(node.name, Location::new(node.x, node.y))?;
        }

        for arc in self.arcs {
            if !arc.cost.is_finite() || arc.cost < 0.0 {
                return Err(PathfinderError::InvalidCost {
                    start: arc.start,
                    finish: arc.finish,
                    cost: arc.cost,
                });
            }
            let start = graph.require_node(&arc.start)?;
            let finish = graph.require_node(&arc.finish)?;
            graph.add_edge(start, finish, arc.cost);
        }

        tracing::debug!(
            nodes = graph.node_count(),
            arcs = graph.arc_count(),
            "graph built"
        );
        Ok(graph)
    }
}

/// Load a map file straight into a graph.
///
/// Parse and validation failures are reported against `path`.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let document = MapDocument::load(path).map_err(|e| match e {
        PathfinderError::Toml(err) => PathfinderError::invalid_map(path, err),
        PathfinderError::Json(err) => PathfinderError::invalid_map(path, err),
        other => other,
    })?;
    document.into_graph()
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

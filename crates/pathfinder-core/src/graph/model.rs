//! Arena-backed graph of named nodes and costed arcs

use std::collections::HashMap;

use crate::error::{PathfinderError, Result};
use crate::graph::types::{Arc, ArcId, Location, Node, NodeId};

/// Weighted graph owning every node and arc.
///
/// Nodes and arcs are only ever appended, so handles stay valid until
/// [`Graph::clear`].
#[derive(Debug, Clone, Default)]
pub struct Graph {
    image: Option<String>,
    nodes: Vec<Node>,
    arcs: Vec<Arc>,
    by_name: HashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph that remembers its map image
    pub fn with_image(image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            ..Self::default()
        }
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Add a node; names are unique keys
    pub fn add_node(&mut self, name: impl Into<String>, location: Location) -> Result<NodeId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(PathfinderError::DuplicateNode { name });
        }

        let id = NodeId::new(self.nodes.len());
        self.by_name.insert(name.clone(), id);
        self.nodes.push(Node {
            id,
            name,
            location,
            arcs: Vec::new(),
        });
        Ok(id)
    }

    /// Add a single directed arc and register it as outgoing from `start`
    pub fn add_arc(&mut self, start: NodeId, finish: NodeId, cost: f64) -> ArcId {
        let id = ArcId::new(self.arcs.len());
        self.arcs.push(Arc {
            id,
            start,
            finish,
            cost,
        });
        self.nodes[start.index()].arcs.push(id);
        id
    }

    /// Add an undirected edge as a pair of opposite arcs, forward arc first
    pub fn add_edge(&mut self, start: NodeId, finish: NodeId, cost: f64) -> (ArcId, ArcId) {
        let forward = self.add_arc(start, finish, cost);
        let reverse = self.add_arc(finish, start, cost);
        (forward, reverse)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn arc(&self, id: ArcId) -> &Arc {
        &self.arcs[id.index()]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    pub fn node_by_name(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Look up a node by name, failing with `NodeNotFound`
    pub fn require_node(&self, name: &str) -> Result<NodeId> {
        self.node_by_name(name)
            .ok_or_else(|| PathfinderError::node_not_found(name))
    }

    /// Drop every node, arc and the image reference
    pub fn clear(&mut self) {
        self.image = None;
        self.nodes.clear();
        self.arcs.clear();
        self.by_name.clear();
    }
}

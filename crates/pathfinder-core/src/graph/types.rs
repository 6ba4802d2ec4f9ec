use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle to a node in a [`Graph`](super::Graph) arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Stable handle to an arc in a [`Graph`](super::Graph) arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArcId(usize);

impl ArcId {
    pub fn new(index: usize) -> Self {
        ArcId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ArcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position of a node on the map image.
///
/// The engines never read it; it is carried for whoever draws the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Location { x, y }
    }
}

/// A named vertex with its outgoing arcs
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub location: Location,
    /// Outgoing arcs, in insertion order
    pub arcs: Vec<ArcId>,
}

/// A directed, costed edge.
///
/// Undirected map edges are stored as two arcs running in opposite
/// directions with the same cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub id: ArcId,
    pub start: NodeId,
    pub finish: NodeId,
    pub cost: f64,
}

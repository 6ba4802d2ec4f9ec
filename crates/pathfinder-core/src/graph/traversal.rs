use crate::graph::model::Graph;
use crate::graph::types::{Arc, ArcId, Node, NodeId};

/// Read-only view of a graph consumed by the engines.
///
/// Node handles run from `0` to `node_count() - 1`. Handles passed in must
/// belong to this graph; the engines do not check referential integrity.
pub trait GraphProvider {
    fn node_count(&self) -> usize;
    fn node(&self, id: NodeId) -> &Node;
    fn arc(&self, id: ArcId) -> &Arc;
    fn arcs(&self) -> &[Arc];
    fn outgoing_arcs(&self, id: NodeId) -> &[ArcId];
}

impl GraphProvider for Graph {
    fn node_count(&self) -> usize {
        self.node_count()
    }

    fn node(&self, id: NodeId) -> &Node {
        self.node(id)
    }

    fn arc(&self, id: ArcId) -> &Arc {
        self.arc(id)
    }

    fn arcs(&self) -> &[Arc] {
        self.arcs()
    }

    fn outgoing_arcs(&self, id: NodeId) -> &[ArcId] {
        &self.node(id).arcs
    }
}

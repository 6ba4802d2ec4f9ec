//! Serializable results handed to whoever displays them

use serde::Serialize;

use crate::graph::algos::{ShortestPath, SpanningForest};
use crate::graph::path::Path;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{ArcId, NodeId};
use crate::graph::Graph;

/// One arc, by node name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcReport {
    pub start: String,
    pub finish: String,
    pub cost: f64,
}

impl ArcReport {
    pub fn new(graph: &dyn GraphProvider, id: ArcId) -> Self {
        let arc = graph.arc(id);
        Self {
            start: graph.node(arc.start).name.clone(),
            finish: graph.node(arc.finish).name.clone(),
            cost: arc.cost,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathOutcome {
    Found,
    SameNode,
    Unreachable,
}

/// Shortest-path search result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    pub from: String,
    pub to: String,
    pub outcome: PathOutcome,
    pub total_cost: f64,
    pub hops: usize,
    pub arcs: Vec<ArcReport>,
    /// Visited node names, in walk order
    pub nodes: Vec<String>,
}

impl PathReport {
    pub fn new(graph: &dyn GraphProvider, from: NodeId, to: NodeId, result: &ShortestPath) -> Self {
        let (outcome, path) = match result {
            ShortestPath::Found(path) => (PathOutcome::Found, Some(path)),
            ShortestPath::SameNode => (PathOutcome::SameNode, None),
            ShortestPath::Unreachable => (PathOutcome::Unreachable, None),
        };
        let empty = Path::new();
        let path = path.unwrap_or(&empty);

        let arcs = path
            .arcs()
            .iter()
            .map(|&id| ArcReport::new(graph, id))
            .collect();

        let mut nodes = Vec::with_capacity(path.size() + 1);
        if let Some(origin) = path.origin() {
            nodes.push(graph.node(origin).name.clone());
        }
        for &id in path.arcs() {
            nodes.push(graph.node(graph.arc(id).finish).name.clone());
        }

        Self {
            from: graph.node(from).name.clone(),
            to: graph.node(to).name.clone(),
            outcome,
            total_cost: path.total_cost(),
            hops: path.size(),
            arcs,
            nodes,
        }
    }
}

/// Spanning tree or forest result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningReport {
    pub total_cost: f64,
    pub arc_count: usize,
    pub component_count: usize,
    pub arcs: Vec<ArcReport>,
    pub components: Vec<Vec<String>>,
}

impl SpanningReport {
    pub fn new(graph: &dyn GraphProvider, forest: &SpanningForest) -> Self {
        Self {
            total_cost: forest.total_cost,
            arc_count: forest.arcs.len(),
            component_count: forest.component_count(),
            arcs: forest
                .arcs
                .iter()
                .map(|&id| ArcReport::new(graph, id))
                .collect(),
            components: forest
                .components
                .iter()
                .map(|set| set.iter().map(|&id| graph.node(id).name.clone()).collect())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeReport {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub degree: usize,
}

/// Overview of a loaded map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSummary {
    pub image: Option<String>,
    pub node_count: usize,
    /// Directed arcs; each undirected edge counts twice
    pub arc_count: usize,
    pub nodes: Vec<NodeReport>,
}

impl MapSummary {
    pub fn new(graph: &Graph) -> Self {
        Self {
            image: graph.image().map(str::to_string),
            node_count: graph.node_count(),
            arc_count: graph.arc_count(),
            nodes: graph
                .nodes()
                .iter()
                .map(|node| NodeReport {
                    name: node.name.clone(),
                    x: node.location.x,
                    y: node.location.y,
                    degree: node.arcs.len(),
                })
                .collect(),
        }
    }
}

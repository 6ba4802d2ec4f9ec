//! Walks through the graph with running cost and visited-node set

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::error::{PathfinderError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Arc, ArcId, NodeId};

/// An ordered sequence of arcs forming a connected walk.
///
/// `Path` is a plain value: cloning yields an independent copy, so a
/// candidate can be extended without touching the paths it branched from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    arcs: Vec<ArcId>,
    origin: Option<NodeId>,
    endpoint: Option<NodeId>,
    nodes: BTreeSet<NodeId>,
    total_cost: f64,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the walk by one hop.
    ///
    /// The arc must start where the walk currently ends; on an empty path
    /// its start becomes the origin.
    pub fn append(&mut self, arc: &Arc) -> Result<()> {
        match self.endpoint {
            Some(endpoint) if endpoint != arc.start => {
                return Err(PathfinderError::DisconnectedArc {
                    arc: arc.id,
                    start: arc.start,
                    endpoint,
                });
            }
            Some(_) => {}
            None => {
                self.origin = Some(arc.start);
                self.nodes.insert(arc.start);
            }
        }

        self.arcs.push(arc.id);
        self.nodes.insert(arc.finish);
        self.endpoint = Some(arc.finish);
        self.total_cost += arc.cost;
        Ok(())
    }

    /// Copy of this path extended by `arc`; `self` is left unchanged
    pub fn extended(&self, arc: &Arc) -> Result<Path> {
        let mut next = self.clone();
        next.append(arc)?;
        Ok(next)
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of arcs in the walk
    pub fn size(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    pub fn arc_at(&self, index: usize) -> Result<ArcId> {
        self.arcs
            .get(index)
            .copied()
            .ok_or(PathfinderError::OutOfRange {
                index,
                len: self.arcs.len(),
            })
    }

    pub fn arcs(&self) -> &[ArcId] {
        &self.arcs
    }

    pub fn visited_nodes(&self) -> &BTreeSet<NodeId> {
        &self.nodes
    }

    pub fn origin(&self) -> Option<NodeId> {
        self.origin
    }

    pub fn endpoint(&self) -> Option<NodeId> {
        self.endpoint
    }

    /// One `start -> finish (cost)` line per arc
    pub fn render(&self, graph: &dyn GraphProvider) -> String {
        let mut out = String::new();
        for &id in &self.arcs {
            let arc = graph.arc(id);
            let _ = writeln!(
                out,
                "{} -> {} ({})",
                graph.node(arc.start).name,
                graph.node(arc.finish).name,
                arc.cost
            );
        }
        out
    }
}

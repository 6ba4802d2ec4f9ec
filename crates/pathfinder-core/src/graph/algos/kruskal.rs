//! Minimum spanning tree via Kruskal's algorithm.
//!
//! Arcs are scanned cheapest first and accepted when they join two
//! different components of the [`Partition`]. Both arcs of an undirected
//! edge are candidates; once one is accepted its twin connects nodes that
//! already share a set and is rejected.

use std::time::Instant;

use crate::graph::algos::partition::Partition;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Arc, ArcId, NodeId};

/// Minimum-cost spanning forest: one tree per connected component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpanningForest {
    /// Accepted arcs, in acceptance order
    pub arcs: Vec<ArcId>,
    pub total_cost: f64,
    /// Node sets joined by the accepted arcs, ordered by smallest node
    pub components: Vec<Vec<NodeId>>,
}

impl SpanningForest {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// True when the forest is a single tree over every node
    pub fn is_tree(&self) -> bool {
        self.components.len() <= 1
    }

    pub fn contains(&self, arc: ArcId) -> bool {
        self.arcs.contains(&arc)
    }
}

/// Kruskal's minimum spanning forest over every node and arc of `graph`.
///
/// Ties in cost keep arc insertion order. Time: O(E log E) for the sort
/// plus near-constant work per arc in the partition.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), arcs = graph.arcs().len()))]
pub fn kruskal_spanning_forest(graph: &dyn GraphProvider) -> SpanningForest {
    let began = Instant::now();
    let n = graph.node_count();

    let mut order: Vec<&Arc> = graph.arcs().iter().collect();
    // Stable: equal costs stay in insertion order
    order.sort_by(|a, b| a.cost.total_cmp(&b.cost));

    let mut partition = Partition::new(n);
    let mut forest = SpanningForest::default();
    let mut rejected = 0usize;

    for arc in order {
        if partition.set_count() <= 1 {
            break;
        }

        if partition.union(arc.start, arc.finish) {
            forest.arcs.push(arc.id);
            forest.total_cost += arc.cost;
        } else {
            rejected += 1;
        }
    }

    forest.components = partition.sets();

    tracing::debug!(
        accepted = forest.arcs.len(),
        rejected,
        components = forest.components.len(),
        total_cost = forest.total_cost,
        "spanning forest built"
    );
    crate::trace_time!(began, "kruskal_spanning_forest");
    forest
}

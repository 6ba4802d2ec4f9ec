use crate::error::Result;
use crate::graph::path::Path;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::NodeId;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::Instant;

/// Frontier entry: a candidate path and where it currently ends.
///
/// Ordered by accumulated cost, then by insertion sequence so that
/// equal-cost candidates leave the heap in FIFO order.
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub path: Path,
    pub endpoint: NodeId,
    pub seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.path
            .total_cost()
            .total_cmp(&other.path.total_cost())
            .then(self.seq.cmp(&other.seq))
    }
}

/// Outcome of a shortest-path search
#[derive(Debug, Clone, PartialEq)]
pub enum ShortestPath {
    /// Minimum-cost walk from start to finish
    Found(Path),
    /// Start and finish are the same node; nothing to walk
    SameNode,
    /// Finish cannot be reached from start
    Unreachable,
}

impl ShortestPath {
    pub fn is_found(&self) -> bool {
        matches!(self, ShortestPath::Found(_))
    }

    /// Collapse to a plain path: empty for `SameNode` and `Unreachable`
    pub fn into_path(self) -> Path {
        match self {
            ShortestPath::Found(path) => path,
            ShortestPath::SameNode | ShortestPath::Unreachable => Path::new(),
        }
    }
}

/// State tracked during one search; never shared between searches
struct DijkstraState {
    /// Node -> cost at which it was finalized
    finalized: HashMap<NodeId, f64>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    next_seq: u64,
    expanded: usize,
}

impl DijkstraState {
    fn new() -> Self {
        Self {
            finalized: HashMap::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
            expanded: 0,
        }
    }

    fn push(&mut self, path: Path, endpoint: NodeId) {
        self.heap.push(Reverse(HeapEntry {
            path,
            endpoint,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }
}

/// Best-first search over partial paths from `start` to `finish`.
///
/// Arc costs must be non-negative; this is not checked.
#[tracing::instrument(skip(graph), fields(start = %start, finish = %finish))]
pub fn dijkstra_search(
    graph: &dyn GraphProvider,
    start: NodeId,
    finish: NodeId,
) -> Result<ShortestPath> {
    if start == finish {
        return Ok(ShortestPath::SameNode);
    }

    let began = Instant::now();
    let mut state = DijkstraState::new();
    state.push(Path::new(), start);

    while let Some(Reverse(HeapEntry { path, endpoint, .. })) = state.heap.pop() {
        // Stale entry: a cheaper path already finalized this node
        if state.finalized.contains_key(&endpoint) {
            continue;
        }

        if endpoint == finish {
            tracing::debug!(
                expanded = state.expanded,
                enqueued = state.next_seq,
                hops = path.size(),
                cost = path.total_cost(),
                "path found"
            );
            crate::trace_time!(began, "dijkstra_search");
            return Ok(ShortestPath::Found(path));
        }

        state.finalized.insert(endpoint, path.total_cost());
        state.expanded += 1;

        for &arc_id in graph.outgoing_arcs(endpoint) {
            let arc = graph.arc(arc_id);
            if !state.finalized.contains_key(&arc.finish) {
                let next = path.extended(arc)?;
                state.push(next, arc.finish);
            }
        }
    }

    tracing::debug!(
        expanded = state.expanded,
        enqueued = state.next_seq,
        "frontier exhausted"
    );
    crate::trace_time!(began, "dijkstra_search");
    Ok(ShortestPath::Unreachable)
}

/// Minimum-cost path from `start` to `finish`.
///
/// Returns the empty path both when no path exists and when
/// `start == finish`; use [`dijkstra_search`] to tell the two apart.
pub fn find_shortest_path(
    graph: &dyn GraphProvider,
    start: NodeId,
    finish: NodeId,
) -> Result<Path> {
    dijkstra_search(graph, start, finish).map(ShortestPath::into_path)
}

#[cfg(test)]
mod tests;

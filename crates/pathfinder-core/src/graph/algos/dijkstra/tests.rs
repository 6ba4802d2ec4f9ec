use super::*;
use crate::graph::{ArcId, Graph, Location};

fn node(graph: &mut Graph, name: &str) -> NodeId {
    graph.add_node(name, Location::default()).unwrap()
}

/// A-B (1), B-C (1), A-C (5)
fn triangle() -> (Graph, NodeId, NodeId, NodeId) {
    let mut graph = Graph::new();
    let a = node(&mut graph, "A");
    let b = node(&mut graph, "B");
    let c = node(&mut graph, "C");
    graph.add_edge(a, b, 1.0);
    graph.add_edge(b, c, 1.0);
    graph.add_edge(a, c, 5.0);
    (graph, a, b, c)
}

fn names(graph: &Graph, path: &Path) -> Vec<(String, String)> {
    path.arcs()
        .iter()
        .map(|&id| {
            let arc = graph.arc(id);
            (
                graph.node(arc.start).name.clone(),
                graph.node(arc.finish).name.clone(),
            )
        })
        .collect()
}

fn entry(cost: f64, seq: u64) -> HeapEntry {
    let mut path = Path::new();
    if cost > 0.0 {
        path.append(&crate::graph::Arc {
            id: ArcId::new(0),
            start: NodeId::new(0),
            finish: NodeId::new(1),
            cost,
        })
        .unwrap();
    }
    HeapEntry {
        path,
        endpoint: NodeId::new(1),
        seq,
    }
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let cheap = entry(1.0, 5);
    let dear = entry(2.0, 0);
    let cheap_later = entry(1.0, 9);

    // Lower cost wins regardless of sequence
    assert_eq!(cheap.cmp(&dear), std::cmp::Ordering::Less);
    assert_eq!(dear.cmp(&cheap), std::cmp::Ordering::Greater);

    // Equal costs fall back to insertion order
    assert_eq!(cheap.cmp(&cheap_later), std::cmp::Ordering::Less);
    assert_ne!(cheap, cheap_later);
    assert_eq!(cheap, cheap.clone());
}

#[test]
fn test_min_heap_pops_fifo_among_ties() {
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(entry(3.0, 0)));
    heap.push(Reverse(entry(1.0, 2)));
    heap.push(Reverse(entry(1.0, 1)));

    let order: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.seq)).collect();
    assert_eq!(order, vec![1, 2, 0]);
}

#[test]
fn test_prefers_cheaper_two_hop_route() {
    let (graph, a, _, c) = triangle();

    let path = match dijkstra_search(&graph, a, c).unwrap() {
        ShortestPath::Found(path) => path,
        other => panic!("expected a path, got {other:?}"),
    };

    assert_eq!(path.total_cost(), 2.0);
    assert_eq!(
        names(&graph, &path),
        vec![
            ("A".to_string(), "B".to_string()),
            ("B".to_string(), "C".to_string())
        ]
    );
    assert_eq!(path.origin(), Some(a));
    assert_eq!(path.endpoint(), Some(c));
    assert_eq!(path.visited_nodes().len(), 3);
}

#[test]
fn test_direct_arc_when_cheapest() {
    let (graph, a, b, _) = triangle();
    let path = find_shortest_path(&graph, a, b).unwrap();
    assert_eq!(path.size(), 1);
    assert_eq!(path.total_cost(), 1.0);
}

#[test]
fn test_reverse_direction_uses_twin_arcs() {
    let (graph, a, _, c) = triangle();
    let path = find_shortest_path(&graph, c, a).unwrap();
    assert_eq!(path.total_cost(), 2.0);
    assert_eq!(
        names(&graph, &path),
        vec![
            ("C".to_string(), "B".to_string()),
            ("B".to_string(), "A".to_string())
        ]
    );
}

#[test]
fn test_same_node_returns_empty_path() {
    let (graph, a, _, _) = triangle();

    assert_eq!(
        dijkstra_search(&graph, a, a).unwrap(),
        ShortestPath::SameNode
    );
    let path = find_shortest_path(&graph, a, a).unwrap();
    assert!(path.is_empty());
    assert_eq!(path.total_cost(), 0.0);
}

#[test]
fn test_unreachable_returns_empty_path() {
    // {A, B} and {C, D} with no bridge
    let mut graph = Graph::new();
    let a = node(&mut graph, "A");
    let b = node(&mut graph, "B");
    let c = node(&mut graph, "C");
    let d = node(&mut graph, "D");
    graph.add_edge(a, b, 1.0);
    graph.add_edge(c, d, 1.0);

    assert_eq!(
        dijkstra_search(&graph, a, c).unwrap(),
        ShortestPath::Unreachable
    );
    let path = find_shortest_path(&graph, a, c).unwrap();
    assert_eq!(path.size(), 0);
    assert_eq!(path.total_cost(), 0.0);
}

#[test]
fn test_isolated_start_node() {
    let mut graph = Graph::new();
    let a = node(&mut graph, "A");
    let b = node(&mut graph, "B");
    assert_eq!(
        dijkstra_search(&graph, a, b).unwrap(),
        ShortestPath::Unreachable
    );
}

#[test]
fn test_directed_arc_is_one_way() {
    let mut graph = Graph::new();
    let a = node(&mut graph, "A");
    let b = node(&mut graph, "B");
    graph.add_arc(a, b, 4.0);

    assert_eq!(find_shortest_path(&graph, a, b).unwrap().total_cost(), 4.0);
    assert_eq!(
        dijkstra_search(&graph, b, a).unwrap(),
        ShortestPath::Unreachable
    );
}

#[test]
fn test_zero_cost_arcs() {
    let mut graph = Graph::new();
    let a = node(&mut graph, "A");
    let b = node(&mut graph, "B");
    let c = node(&mut graph, "C");
    graph.add_edge(a, b, 0.0);
    graph.add_edge(b, c, 0.0);
    graph.add_edge(a, c, 1.0);

    let path = find_shortest_path(&graph, a, c).unwrap();
    assert_eq!(path.total_cost(), 0.0);
    assert_eq!(path.size(), 2);
    assert!(path.visited_nodes().contains(&a));
}

#[test]
fn test_long_detour_beats_expensive_shortcut() {
    // Ring of five cheap hops versus one expensive chord
    let mut graph = Graph::new();
    let ids: Vec<NodeId> = (0..6).map(|i| node(&mut graph, &format!("N{i}"))).collect();
    for pair in ids.windows(2) {
        graph.add_edge(pair[0], pair[1], 1.5);
    }
    graph.add_edge(ids[0], ids[5], 10.0);

    let path = find_shortest_path(&graph, ids[0], ids[5]).unwrap();
    assert_eq!(path.size(), 5);
    assert_eq!(path.total_cost(), 7.5);
}

#[test]
fn test_equal_cost_tie_prefers_first_enqueued() {
    // A reaches D through B or C at equal cost; B's arc is inserted first
    let mut graph = Graph::new();
    let a = node(&mut graph, "A");
    let b = node(&mut graph, "B");
    let c = node(&mut graph, "C");
    let d = node(&mut graph, "D");
    graph.add_edge(a, b, 1.0);
    graph.add_edge(a, c, 1.0);
    graph.add_edge(b, d, 1.0);
    graph.add_edge(c, d, 1.0);

    let path = find_shortest_path(&graph, a, d).unwrap();
    assert_eq!(path.total_cost(), 2.0);
    assert!(path.visited_nodes().contains(&b));
    assert!(!path.visited_nodes().contains(&c));
}

#[test]
fn test_walk_is_connected() {
    let (graph, a, _, c) = triangle();
    let path = find_shortest_path(&graph, a, c).unwrap();
    for pair in path.arcs().windows(2) {
        assert_eq!(graph.arc(pair[0]).finish, graph.arc(pair[1]).start);
    }
}

#[test]
fn test_searches_do_not_share_state() {
    let (graph, a, b, c) = triangle();
    let first = find_shortest_path(&graph, a, c).unwrap();
    let second = find_shortest_path(&graph, a, c).unwrap();
    assert_eq!(first, second);
    assert_eq!(find_shortest_path(&graph, b, a).unwrap().total_cost(), 1.0);
}

//! Connected-component partition for spanning-tree construction
//!
//! Union-find with path halving and union by size.

use crate::graph::types::NodeId;

/// Disjoint sets of nodes, starting as one singleton per node.
///
/// Every node belongs to exactly one set; two nodes share a set iff they
/// have been joined through [`Partition::union`].
#[derive(Debug, Clone)]
pub struct Partition {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl Partition {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            sets: n,
        }
    }

    /// Representative index of the set holding `node`
    pub fn find(&mut self, node: NodeId) -> usize {
        let mut x = node.index();
        while self.parent[x] != x {
            // Path halving
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets holding `a` and `b`.
    ///
    /// Returns false when they were already in the same set.
    pub fn union(&mut self, a: NodeId, b: NodeId) -> bool {
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return false;
        }

        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.sets -= 1;
        true
    }

    pub fn same_set(&mut self, a: NodeId, b: NodeId) -> bool {
        self.find(a) == self.find(b)
    }

    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Number of nodes in the set holding `node`
    pub fn set_size(&mut self, node: NodeId) -> usize {
        let root = self.find(node);
        self.size[root]
    }

    /// All sets, each sorted, ordered by their smallest node
    pub fn sets(&mut self) -> Vec<Vec<NodeId>> {
        let n = self.parent.len();
        let mut slot_of_root = vec![usize::MAX; n];
        let mut sets: Vec<Vec<NodeId>> = Vec::with_capacity(self.sets);

        for index in 0..n {
            let node = NodeId::new(index);
            let root = self.find(node);
            if slot_of_root[root] == usize::MAX {
                slot_of_root[root] = sets.len();
                sets.push(Vec::new());
            }
            sets[slot_of_root[root]].push(node);
        }
        sets
    }
}

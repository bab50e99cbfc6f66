use crate::KeySet;

/// A hop from one point of interest to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    pub to: usize,
    pub dist: usize,
    // Keys needed to open every door on the way
    pub doors: KeySet,
}

impl Edge {
    // Usable whenever `other` is, and never longer
    pub fn dominates(&self, other: &Edge) -> bool {
        self.to == other.to && other.doors.is_superset(&self.doors) && self.dist <= other.dist
    }
}

/// The maze reduced to its points of interest.
///
/// Nodes `0..agents` are agent starts, nodes `agents..agents + keys` are
/// keys in rank order. Edges only ever lead to key nodes.
#[derive(Debug, Clone)]
pub struct Graph {
    agents: usize,
    keys: usize,
    edges: Vec<Vec<Edge>>,
}

impl Graph {
    pub fn new(agents: usize, keys: usize, edges: Vec<Vec<Edge>>) -> Self {
        assert_eq!(edges.len(), agents + keys, "one edge list per node");
        Self {
            agents,
            keys,
            edges,
        }
    }

    pub fn agent_count(&self) -> usize {
        self.agents
    }

    pub fn key_count(&self) -> usize {
        self.keys
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self, node: usize) -> &[Edge] {
        &self.edges[node]
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|es| es.len()).sum()
    }

    /// Key bit collected on arrival at `node`, `None` for agent starts.
    pub fn key_bit(&self, node: usize) -> Option<usize> {
        node.checked_sub(self.agents).filter(|&bit| bit < self.keys)
    }

    pub fn all_keys(&self) -> KeySet {
        KeySet::full(self.keys)
    }
}

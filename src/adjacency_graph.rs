//! An adjacency-list graph keyed by node label, with insertion-ordered node
//! enumeration.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::graph::{Graph, NodeId, Weight};

/// A graph implementation storing nodes in a contiguous vector and adjacency
/// entries as per-node edge lists.
///
/// Nodes enumerate in insertion order and edge lists preserve the order in
/// which entries were recorded, so enumeration order is stable and the
/// solver's tie-breaking is deterministic for a given construction sequence.
///
/// [`Self::add_edge`] records an undirected edge as a mirrored pair of
/// entries; [`Self::add_arc`] records a single directional entry.  Parallel
/// edges and self-loops are allowed and kept as ordinary entries.
///
/// # Type Parameters
/// * `N` - The node label type
/// * `W` - The edge weight type
#[derive(Clone, Debug, Default)]
pub struct AdjacencyGraph<N, W> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Creates a graph from undirected `(a, b, weight)` edges.  Endpoints are
    /// added as nodes in order of first appearance.
    pub fn from_edges(edges: impl IntoIterator<Item = (N, N, W)>) -> Self {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            graph.add_edge(a, b, weight);
        }
        graph
    }

    /// Adds a node with the given label.  Returns `false` if the label is
    /// already present, in which case the graph is unchanged.
    pub fn add_node(&mut self, label: N) -> bool {
        if self.index.contains_key(&label) {
            return false;
        }
        self.index.insert(label.clone(), self.nodes.len());
        self.nodes.push(label);
        self.adjacency.push(Vec::new());
        true
    }

    /// Records a single directional adjacency entry from `from` to `into`.
    /// Endpoints not yet in the graph are added.
    pub fn add_arc(&mut self, from: N, into: N, weight: W) {
        self.add_node(from.clone());
        self.add_node(into.clone());
        let into_slot = self.index[&into];
        let from_slot = self.index[&from];
        self.adjacency[from_slot].push((into_slot, weight));
    }

    /// Records an undirected edge between `a` and `b` as mirrored entries.
    /// A self-loop collapses to one entry, since both directions coincide.
    pub fn add_edge(&mut self, a: N, b: N, weight: W) {
        if a == b {
            self.add_arc(a, b, weight);
        } else {
            self.add_arc(a.clone(), b.clone(), weight);
            self.add_arc(b, a, weight);
        }
    }
}

impl<N, W> Graph for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    type NodeId = N;
    type Weight = W;

    fn node_ids(&self) -> impl Iterator<Item = N> + '_ {
        self.nodes.iter().cloned()
    }

    fn neighbors(&self, id: &N) -> impl Iterator<Item = (N, W)> + '_ {
        self.index.get(id).into_iter().flat_map(|&slot| {
            self.adjacency[slot]
                .iter()
                .map(|&(target, weight)| (self.nodes[target].clone(), weight))
        })
    }

    fn contains_node(&self, id: &N) -> bool {
        self.index.contains_key(id)
    }

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn num_entries(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

/// Builds the six-node example graph used by the demo and the tests:
/// `A-B:5, A-C:3, A-E:11, B-C:1, B-F:2, C-D:1, C-E:5, D-E:9, D-F:3`.
pub fn reference_graph() -> AdjacencyGraph<&'static str, u32> {
    let mut graph = AdjacencyGraph::new();
    for label in ["A", "B", "C", "D", "E", "F"] {
        graph.add_node(label);
    }
    for (a, b, weight) in [
        ("A", "B", 5),
        ("A", "C", 3),
        ("A", "E", 11),
        ("B", "C", 1),
        ("B", "F", 2),
        ("C", "D", 1),
        ("C", "E", 5),
        ("D", "E", 9),
        ("D", "F", 3),
    ] {
        graph.add_edge(a, b, weight);
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_enumerate_in_insertion_order() {
        let mut graph = AdjacencyGraph::<&str, u32>::new();
        graph.add_node("C");
        graph.add_node("A");
        graph.add_node("B");
        assert_eq!(graph.node_ids().collect::<Vec<_>>(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = AdjacencyGraph::<&str, u32>::new();
        assert!(graph.add_node("A"));
        assert!(!graph.add_node("A"));
        assert_eq!(graph.num_nodes(), 1);
    }

    #[test]
    fn test_add_edge_records_both_directions() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge("A", "B", 5u32);
        assert_eq!(graph.neighbors(&"A").collect::<Vec<_>>(), vec![("B", 5)]);
        assert_eq!(graph.neighbors(&"B").collect::<Vec<_>>(), vec![("A", 5)]);
        assert_eq!(graph.num_entries(), 2);
    }

    #[test]
    fn test_add_arc_records_one_direction() {
        let mut graph = AdjacencyGraph::new();
        graph.add_arc("A", "B", 5u32);
        assert_eq!(graph.neighbors(&"A").collect::<Vec<_>>(), vec![("B", 5)]);
        assert_eq!(graph.neighbors(&"B").count(), 0);
    }

    #[test]
    fn test_self_loop_is_a_single_entry() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge("A", "A", 2u32);
        assert_eq!(graph.neighbors(&"A").collect::<Vec<_>>(), vec![("A", 2)]);
    }

    #[test]
    fn test_from_edges_adds_endpoints_in_order_of_appearance() {
        let graph = AdjacencyGraph::from_edges([("B", "A", 1u32), ("A", "C", 2)]);
        assert_eq!(graph.node_ids().collect::<Vec<_>>(), vec!["B", "A", "C"]);
        assert_eq!(graph.edge_weight(&"C", &"A"), Some(2));
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge("A", "B", 5u32);
        graph.add_edge("A", "B", 7u32);
        assert_eq!(
            graph.neighbors(&"A").collect::<Vec<_>>(),
            vec![("B", 5), ("B", 7)]
        );
    }

    #[test]
    fn test_edge_weight_matches_either_orientation() {
        let mut graph = AdjacencyGraph::new();
        graph.add_arc("A", "B", 5u32);
        assert_eq!(graph.edge_weight(&"A", &"B"), Some(5));
        assert_eq!(graph.edge_weight(&"B", &"A"), Some(5));
        assert_eq!(graph.edge_weight(&"A", &"C"), None);
    }

    #[test]
    fn test_neighbors_of_unknown_node_is_empty() {
        let graph = AdjacencyGraph::<&str, u32>::new();
        assert_eq!(graph.neighbors(&"A").count(), 0);
        assert!(!graph.contains_node(&"A"));
    }

    #[test]
    fn test_reference_graph_adjacency() {
        let graph = reference_graph();
        assert_eq!(graph.num_nodes(), 6);
        assert_eq!(graph.num_entries(), 18);
        assert_eq!(
            graph.neighbors(&"C").collect::<Vec<_>>(),
            vec![("A", 3), ("B", 1), ("D", 1), ("E", 5)]
        );
        assert_eq!(graph.edge_weight(&"F", &"B"), Some(2));
    }
}

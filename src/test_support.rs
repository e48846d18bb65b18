//! Quickcheck generators for property tests.

use quickcheck::{Arbitrary, Gen};

use crate::adjacency_graph::AdjacencyGraph;

const LABELS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// A small random labeled graph plus a start node drawn from its label set.
/// Parallel edges, self-loops, and isolated nodes all occur.
#[derive(Clone, Debug)]
pub struct ArbGraph {
    pub graph: AdjacencyGraph<char, u32>,
    pub start: char,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_nodes = 1 + usize::arbitrary(g) % LABELS.len();
        let labels = &LABELS[..num_nodes];

        let mut graph = AdjacencyGraph::new();
        for &label in labels {
            graph.add_node(label);
        }

        let num_edges = usize::arbitrary(g) % 16;
        for _ in 0..num_edges {
            let a = labels[usize::arbitrary(g) % num_nodes];
            let b = labels[usize::arbitrary(g) % num_nodes];
            let weight = u32::arbitrary(g) % 100;
            graph.add_edge(a, b, weight);
        }

        let start = labels[usize::arbitrary(g) % num_nodes];
        ArbGraph { graph, start }
    }
}

//! `Graph` is the core trait for working with weighted graphs in this
//! library. It provides read-only access to the node set and adjacency; graph
//! construction is the concern of concrete implementations such as
//! [`AdjacencyGraph`](crate::adjacency_graph::AdjacencyGraph).
//!
//! This module provides:
//!
//! - [`NodeId`] and [`Weight`] marker traits describing what can label a node
//!   and weigh an edge
//! - [`Graph`] trait: adjacency queries plus a provided
//!   [`shortest_paths`](Graph::shortest_paths) entry point
//!
//! Adjacency is directional as encoded: an undirected edge is represented by
//! a pair of mirrored entries, and implementations are not required to
//! enforce that symmetry. Algorithms in this crate process the entries
//! exactly as given.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use crate::error::RouteError;
use crate::route::{self, ShortestPaths};

/// A trait for types that can identify a node in a graph, e.g. a short
/// string label.  This trait has no methods; it is a marker implemented for
/// every type with the required bounds.
pub trait NodeId: Eq + Hash + Ord + Clone + Debug {}

impl<T: Eq + Hash + Ord + Clone + Debug> NodeId for T {}

/// A trait for edge weight types.  `Default::default()` must be the additive
/// zero; `Ord` gives the total order the solver selects minima with.
pub trait Weight: Copy + Ord + Default + Add<Output = Self> + Debug {}

impl<T: Copy + Ord + Default + Add<Output = T> + Debug> Weight for T {}

/// A trait representing a weighted graph data structure.
///
/// [`Self::node_ids`] and [`Self::neighbors`] must yield their items in a
/// stable, implementation-defined enumeration order that is identical across
/// calls on the same value.  The solver's tie-breaking (first node at the
/// minimum distance wins) is defined in terms of that order, so changing it
/// changes the visitation order of equal-distance nodes.
pub trait Graph: Sized {
    type NodeId: NodeId;
    type Weight: Weight;

    /// Gets an iterator over all node identifiers, in enumeration order.
    fn node_ids(&self) -> impl Iterator<Item = Self::NodeId> + '_;

    /// Gets an iterator over the `(neighbor, weight)` entries recorded for a
    /// node, in the order they were recorded.  Yields nothing for a node that
    /// is not in the graph.
    fn neighbors(&self, id: &Self::NodeId) -> impl Iterator<Item = (Self::NodeId, Self::Weight)> + '_;

    /// Checks whether a node is in the graph.  This default implementation
    /// scans the node set; implementations with an index should override it.
    fn contains_node(&self, id: &Self::NodeId) -> bool {
        self.node_ids().any(|nid| nid == *id)
    }

    /// Gets the number of nodes in the graph.
    fn num_nodes(&self) -> usize {
        self.node_ids().count()
    }

    /// Gets the number of adjacency entries in the graph.  A symmetrically
    /// encoded undirected edge counts twice.
    fn num_entries(&self) -> usize {
        self.node_ids().map(|nid| self.neighbors(&nid).count()).sum()
    }

    /// Looks up the weight of the edge between two nodes, matching endpoints
    /// in either orientation: the `(a, b)` entry is consulted first, then
    /// `(b, a)`, since edges may be stored directionally.
    fn edge_weight(&self, a: &Self::NodeId, b: &Self::NodeId) -> Option<Self::Weight> {
        self.neighbors(a)
            .find(|(n, _)| n == b)
            .or_else(|| self.neighbors(b).find(|(n, _)| n == a))
            .map(|(_, w)| w)
    }

    /// Finds shortest paths from a starting node to all other nodes using
    /// Dijkstra's algorithm.  See [`route::shortest_paths`] for the full
    /// contract.
    fn shortest_paths(
        &self,
        start: &Self::NodeId,
    ) -> Result<ShortestPaths<Self::NodeId, Self::Weight>, RouteError<Self::NodeId>> {
        route::shortest_paths(self, start)
    }
}

//! Single-source shortest paths via Dijkstra's algorithm.
//!
//! The solver uses repeated linear-scan node selection, O(n²) in the node
//! count, which is the right trade-off for the small static graphs this
//! crate targets.  Selection is deterministic: among unvisited nodes at the
//! minimum distance, the first in enumeration order wins.  Relaxation is
//! unguarded: it does not consult the unvisited set.  With non-negative
//! weights a finalized node can never improve, and negative weights are
//! rejected before the loop starts.

use std::collections::HashMap;
use std::hash::Hash;

use derivative::Derivative;

use crate::error::RouteError;
use crate::graph::{Graph, NodeId, Weight};
use crate::tracing_support::{debug, debug_span, trace};

/// The result of one shortest-path computation: distances, per-node paths,
/// and the order in which nodes were finalized.  All tables are fully
/// populated when the solver returns and never change afterwards.
#[derive(Clone, Debug, Derivative)]
#[derivative(
    PartialEq(bound = "N: Eq + Hash, W: PartialEq"),
    Eq(bound = "N: Eq + Hash, W: Eq")
)]
pub struct ShortestPaths<N, W> {
    start: N,
    nodes: Vec<N>,
    distances: HashMap<N, W>,
    paths: HashMap<N, Vec<N>>,
    visit_order: Vec<N>,
}

impl<N, W> ShortestPaths<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// The start node the computation ran from.
    pub fn start(&self) -> &N {
        &self.start
    }

    /// The graph's nodes, in enumeration order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Checks whether a node was part of the computed graph.
    pub fn contains(&self, node: &N) -> bool {
        self.paths.contains_key(node)
    }

    /// The shortest distance from the start to `node`.  `None` means the
    /// node is unreachable (or unknown): its distance is positive infinity.
    pub fn distance(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied()
    }

    /// Checks whether `node` is reachable from the start.
    pub fn is_reachable(&self, node: &N) -> bool {
        self.distances.contains_key(node)
    }

    /// The shortest path from the start to `node`, inclusive of both
    /// endpoints.  Empty for unreachable or unknown nodes.
    pub fn path(&self, node: &N) -> &[N] {
        self.paths.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Like [`Self::path`], but an unknown target is an error rather than an
    /// empty path.
    pub fn route_to(&self, target: &N) -> Result<&[N], RouteError<N>> {
        if !self.contains(target) {
            return Err(RouteError::UnknownNode(target.clone()));
        }
        Ok(self.path(target))
    }

    /// The order in which nodes were finalized.  Every node appears exactly
    /// once; unreachable nodes are finalized too, after all reachable ones.
    pub fn visit_order(&self) -> &[N] {
        &self.visit_order
    }

    /// The visitation order paired with each node's settled distance, for
    /// driving a step-by-step replay of the computation.
    pub fn steps(&self) -> impl Iterator<Item = (&N, Option<W>)> + '_ {
        self.visit_order.iter().map(|node| (node, self.distance(node)))
    }
}

/// Computes shortest paths from `start` to every node of `graph`.
///
/// Fails with [`RouteError::UnknownNode`] if `start` is not in the graph and
/// with [`RouteError::NegativeWeight`] if any adjacency entry has a weight
/// below `W::default()`.  There is no early termination for a single target:
/// a node's distance can improve until its own finalization, so all nodes
/// are always computed and targets are validated by the consumers of the
/// result ([`ShortestPaths::route_to`] and friends).
pub fn shortest_paths<G: Graph>(
    graph: &G,
    start: &G::NodeId,
) -> Result<ShortestPaths<G::NodeId, G::Weight>, RouteError<G::NodeId>> {
    if !graph.contains_node(start) {
        return Err(RouteError::UnknownNode(start.clone()));
    }
    for node in graph.node_ids() {
        for (neighbor, weight) in graph.neighbors(&node) {
            if weight < G::Weight::default() {
                return Err(RouteError::NegativeWeight {
                    from: node,
                    to: neighbor,
                });
            }
        }
    }

    let nodes: Vec<G::NodeId> = graph.node_ids().collect();
    let _span = debug_span!("shortest_paths").entered();

    let mut distances: HashMap<G::NodeId, G::Weight> = HashMap::new();
    let mut paths: HashMap<G::NodeId, Vec<G::NodeId>> =
        nodes.iter().map(|node| (node.clone(), Vec::new())).collect();
    distances.insert(start.clone(), G::Weight::default());
    paths.insert(start.clone(), vec![start.clone()]);

    // Unvisited nodes, kept in enumeration order so the first-minimum scan
    // below is deterministic.
    let mut unvisited: Vec<G::NodeId> = nodes.clone();
    let mut visit_order: Vec<G::NodeId> = Vec::with_capacity(nodes.len());

    while !unvisited.is_empty() {
        // Select the first unvisited node at the minimum distance; nodes
        // without an entry sit at infinity and sort last.
        let mut best_index = 0;
        let mut best_dist = distances.get(&unvisited[0]).copied();
        for (i, node) in unvisited.iter().enumerate().skip(1) {
            let dist = distances.get(node).copied();
            let better = match (dist, best_dist) {
                (Some(d), Some(b)) => d < b,
                (Some(_), None) => true,
                (None, _) => false,
            };
            if better {
                best_index = i;
                best_dist = dist;
            }
        }
        let current = unvisited.remove(best_index);

        // An unreachable selection has nothing to relax: infinity plus any
        // weight improves no entry.  It is still finalized below.
        if let Some(&current_dist) = distances.get(&current) {
            for (neighbor, weight) in graph.neighbors(&current) {
                let candidate = current_dist + weight;
                if distances.get(&neighbor).map_or(true, |&d| candidate < d) {
                    trace!(?current, ?neighbor, ?candidate, "relaxed");
                    distances.insert(neighbor.clone(), candidate);
                    let mut path = paths[&current].clone();
                    path.push(neighbor.clone());
                    paths.insert(neighbor, path);
                }
            }
        }

        trace!(?current, distance = ?best_dist, "finalized");
        visit_order.push(current);
    }

    debug!(
        nodes = nodes.len(),
        reached = distances.len(),
        "shortest paths computed"
    );

    Ok(ShortestPaths {
        start: start.clone(),
        nodes,
        distances,
        paths,
        visit_order,
    })
}

//! Step-by-step replay of a computed route, for driving a presentation
//! layer.  The walkthrough owns no algorithmic logic: it only replays the
//! solver's output.  The tick cadence belongs to the embedding layer; each
//! external tick calls [`Walkthrough::step`] once.

use derivative::Derivative;

use crate::error::RouteError;
use crate::graph::Graph;
use crate::route::ShortestPaths;

/// Presentation state of a node while a walkthrough is running or finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
    /// Not yet reached by the cursor.
    Pending,
    /// Passed by the cursor; the walkthrough is still running.
    Visited,
    /// On the final path; the walkthrough has finished.
    Final,
    /// Not on the final path; the walkthrough has finished.
    Unused,
}

/// Presentation state of an edge, classified by undirected endpoint match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeState {
    Pending,
    Visited,
    Final,
    Unused,
}

/// One cursor advance: the node entered and, except on the first step, the
/// edge traversed to get there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step<N> {
    pub node: N,
    pub edge: Option<(N, N)>,
}

/// A snapshot of a running walkthrough, carrying the data a status display
/// shows mid-replay.
#[derive(Clone, Copy, Debug)]
pub struct Progress<'w, N, W> {
    /// Nodes the cursor has passed so far, in order.
    pub passed: &'w [N],
    /// The full path being replayed.
    pub path: &'w [N],
    /// Sum of edge weights along the full path.
    pub total_distance: W,
}

/// Replays the shortest path to one target, one node per step.
///
/// Created from a graph, a [`ShortestPaths`] result, and a target node; the
/// graph is only consulted for edge weights.  For an unreachable target the
/// path is empty and the walkthrough starts out finished.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct Walkthrough<'g, G: Graph> {
    #[derivative(Debug = "ignore")]
    graph: &'g G,
    start: G::NodeId,
    target: G::NodeId,
    path: Vec<G::NodeId>,
    cursor: usize,
    passed: Vec<G::NodeId>,
}

impl<'g, G: Graph> Walkthrough<'g, G> {
    /// Creates a walkthrough of the route from the result's start node to
    /// `target`.  Fails with [`RouteError::UnknownNode`] if `target` was not
    /// part of the computed graph.
    pub fn new(
        graph: &'g G,
        result: &ShortestPaths<G::NodeId, G::Weight>,
        target: &G::NodeId,
    ) -> Result<Self, RouteError<G::NodeId>> {
        let path = result.route_to(target)?.to_vec();
        Ok(Self {
            graph,
            start: result.start().clone(),
            target: target.clone(),
            path,
            cursor: 0,
            passed: Vec::new(),
        })
    }

    /// The graph consulted for edge weights.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn start(&self) -> &G::NodeId {
        &self.start
    }

    pub fn target(&self) -> &G::NodeId {
        &self.target
    }

    /// The full path being replayed; empty if the target is unreachable.
    pub fn path(&self) -> &[G::NodeId] {
        &self.path
    }

    /// Nodes the cursor has passed so far, in order.
    pub fn passed(&self) -> &[G::NodeId] {
        &self.passed
    }

    /// True once the cursor has exhausted the path (immediately, for an
    /// empty path).
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.path.len()
    }

    /// Advances the cursor by one node.  Returns `None` once the path is
    /// exhausted.
    pub fn step(&mut self) -> Option<Step<G::NodeId>> {
        let node = self.path.get(self.cursor)?.clone();
        let edge = (self.cursor > 0)
            .then(|| (self.path[self.cursor - 1].clone(), node.clone()));
        self.passed.push(node.clone());
        self.cursor += 1;
        Some(Step { node, edge })
    }

    /// Sum of edge weights along consecutive path pairs, each looked up by
    /// undirected endpoint match.  A pair with no recorded edge contributes
    /// nothing.
    pub fn total_distance(&self) -> G::Weight {
        self.path
            .windows(2)
            .filter_map(|pair| self.graph.edge_weight(&pair[0], &pair[1]))
            .fold(G::Weight::default(), |total, weight| total + weight)
    }

    /// Classifies a node for presentation: passed nodes are `Visited` while
    /// the replay runs; once finished, path nodes are `Final` and everything
    /// else is `Unused`.
    pub fn node_state(&self, node: &G::NodeId) -> NodeState {
        if self.is_finished() {
            if self.path.contains(node) {
                NodeState::Final
            } else {
                NodeState::Unused
            }
        } else if self.passed.contains(node) {
            NodeState::Visited
        } else {
            NodeState::Pending
        }
    }

    /// Classifies an edge for presentation, matching endpoints in either
    /// orientation against consecutive path pairs.
    pub fn edge_state(&self, a: &G::NodeId, b: &G::NodeId) -> EdgeState {
        let position = self.path.windows(2).position(|pair| {
            (pair[0] == *a && pair[1] == *b) || (pair[0] == *b && pair[1] == *a)
        });
        if self.is_finished() {
            match position {
                Some(_) => EdgeState::Final,
                None => EdgeState::Unused,
            }
        } else {
            match position {
                // The pair (path[i], path[i+1]) has been traversed once the
                // cursor has passed path[i+1].
                Some(i) if i + 1 < self.cursor => EdgeState::Visited,
                _ => EdgeState::Pending,
            }
        }
    }

    /// A snapshot of the current replay state.
    pub fn progress(&self) -> Progress<'_, G::NodeId, G::Weight> {
        Progress {
            passed: &self.passed,
            path: &self.path,
            total_distance: self.total_distance(),
        }
    }

    /// Rewinds the cursor and discards all passed-node state, so the
    /// walkthrough can be replayed or superseded by a new computation.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.passed.clear();
    }
}

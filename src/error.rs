use std::fmt::Debug;

/// Errors reported by the solver and its consumers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError<N: Debug> {
    /// A start or target node is not part of the graph.
    #[error("node {0:?} is not in the graph")]
    UnknownNode(N),
    /// An edge with negative weight was found.  The selection strategy used
    /// by the solver is not correctness-preserving under negative weights,
    /// so such graphs are rejected up front.
    #[error("edge {from:?} -> {to:?} has negative weight")]
    NegativeWeight { from: N, to: N },
}

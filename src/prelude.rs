pub use crate::adjacency_graph::{AdjacencyGraph, reference_graph};
pub use crate::error::RouteError;
pub use crate::graph::{Graph, NodeId, Weight};
pub use crate::report::{format_report, format_walkthrough_summary};
pub use crate::route::{ShortestPaths, shortest_paths};
pub use crate::tracing_support::init_tracing;
pub use crate::walkthrough::{EdgeState, NodeState, Progress, Step, Walkthrough};

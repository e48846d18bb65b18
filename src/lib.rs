pub mod adjacency_graph;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod report;
pub mod route;
pub mod test_support;
pub mod tracing_support;
pub mod walkthrough;

pub use adjacency_graph::{AdjacencyGraph, reference_graph};
pub use error::RouteError;
pub use graph::{Graph, NodeId, Weight};
pub use route::{ShortestPaths, shortest_paths};
pub use walkthrough::Walkthrough;

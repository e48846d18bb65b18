//! Textual reports over solver output.  Formatting lives here, outside the
//! solver, so the computation stays free of presentation concerns.

use std::fmt::Display;

use crate::error::RouteError;
use crate::graph::{Graph, NodeId, Weight};
use crate::route::ShortestPaths;
use crate::walkthrough::Walkthrough;

fn join_path<N: Display>(path: &[N]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Formats the distance/path report for `target`, or for every non-start
/// node in enumeration order when `target` is `None`.  Each block reads:
///
/// ```text
/// <start>-<node> distance: <distance>
/// Path: <node1> -> <node2> -> ... -> <nodeK>
/// ```
///
/// Unreachable nodes report `inf` and an empty path.  The start node is
/// never reported, even as an explicit target.  An unknown target fails
/// with [`RouteError::UnknownNode`].
pub fn format_report<N, W>(
    result: &ShortestPaths<N, W>,
    target: Option<&N>,
) -> Result<String, RouteError<N>>
where
    N: NodeId + Display,
    W: Weight + Display,
{
    let targets: Vec<&N> = match target {
        Some(node) => {
            if !result.contains(node) {
                return Err(RouteError::UnknownNode(node.clone()));
            }
            vec![node]
        }
        None => result.nodes().iter().collect(),
    };

    let start = result.start();
    let mut out = String::new();
    for node in targets {
        if node == start {
            continue;
        }
        let distance = match result.distance(node) {
            Some(d) => d.to_string(),
            None => "inf".to_string(),
        };
        out.push_str(&format!(
            "\n{start}-{node} distance: {distance}\nPath: {}\n",
            join_path(result.path(node))
        ));
    }
    Ok(out)
}

/// Formats a status summary of a walkthrough: visited order so far, the
/// shortest path, its total distance, and a per-hop breakdown.
pub fn format_walkthrough_summary<G>(walkthrough: &Walkthrough<'_, G>) -> String
where
    G: Graph,
    G::NodeId: Display,
    G::Weight: Display,
{
    let start = walkthrough.start();
    let target = walkthrough.target();
    let path = walkthrough.path();
    if path.is_empty() {
        return format!("No route from {start} to {target}\n");
    }

    let mut out = String::new();
    out.push_str(&format!("Shortest path from {start} to {target} found!\n"));
    out.push_str("\nVisited Order:\n");
    out.push_str(&join_path(walkthrough.passed()));
    out.push_str("\n\nShortest Path:\n");
    out.push_str(&join_path(path));
    out.push_str(&format!(
        "\n\nTotal Distance: {}\n",
        walkthrough.total_distance()
    ));
    out.push_str("\nPath Details:\n");
    let mut total = G::Weight::default();
    for pair in path.windows(2) {
        let (from, into) = (&pair[0], &pair[1]);
        if let Some(weight) = walkthrough.graph().edge_weight(from, into) {
            total = total + weight;
            out.push_str(&format!("{from} -> {into} ({weight})\n"));
        }
    }
    out.push_str(&format!("Total: {total}\n"));
    out
}

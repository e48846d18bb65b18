//! End-to-end checks against the six-node reference graph.

use wayfinder::prelude::*;

#[test]
fn computes_the_reference_scenario() {
    let graph = reference_graph();
    let result = graph.shortest_paths(&"A").unwrap();

    for (node, distance) in [("A", 0), ("B", 4), ("C", 3), ("D", 4), ("E", 8), ("F", 6)] {
        assert_eq!(result.distance(&node), Some(distance), "distance to {node}");
    }
    assert_eq!(result.path(&"F"), ["A", "C", "B", "F"]);

    let report = format_report(&result, Some(&"F")).unwrap();
    assert!(report.contains("A-F distance: 6"));
    assert!(report.contains("Path: A -> C -> B -> F"));
}

#[test]
fn rejects_an_unknown_start() {
    let graph = reference_graph();
    assert_eq!(
        graph.shortest_paths(&"Z"),
        Err(RouteError::UnknownNode("Z"))
    );
}

#[test]
fn isolated_node_is_unreachable() {
    let mut graph = reference_graph();
    graph.add_node("G");
    let result = graph.shortest_paths(&"A").unwrap();
    assert_eq!(result.distance(&"G"), None);
    assert!(result.path(&"G").is_empty());
}

#[test]
fn visitation_order_is_deterministic() {
    let graph = reference_graph();
    let result = graph.shortest_paths(&"A").unwrap();
    assert_eq!(result.visit_order(), ["A", "C", "B", "D", "F", "E"]);
}

#[test]
fn walkthrough_replays_the_route() {
    let graph = reference_graph();
    let result = graph.shortest_paths(&"A").unwrap();
    let mut walkthrough = Walkthrough::new(&graph, &result, &"F").unwrap();

    let mut visited = Vec::new();
    while let Some(step) = walkthrough.step() {
        visited.push(step.node);
    }
    assert_eq!(visited, ["A", "C", "B", "F"]);
    assert_eq!(walkthrough.total_distance(), 6);
    assert_eq!(walkthrough.node_state(&"E"), NodeState::Unused);
    assert_eq!(walkthrough.edge_state(&"B", &"F"), EdgeState::Final);
}

#[test]
fn no_shorter_route_exists() {
    // Brute-force all simple paths from A to F and confirm nothing beats
    // the solver's answer.
    let graph = reference_graph();
    let result = graph.shortest_paths(&"A").unwrap();
    let best = result.distance(&"F").unwrap();

    fn explore(
        graph: &AdjacencyGraph<&'static str, u32>,
        node: &'static str,
        cost: u32,
        seen: &mut Vec<&'static str>,
        best: &mut u32,
    ) {
        if node == "F" {
            *best = (*best).min(cost);
            return;
        }
        for (neighbor, weight) in graph.neighbors(&node) {
            if !seen.contains(&neighbor) {
                seen.push(neighbor);
                explore(graph, neighbor, cost + weight, seen, best);
                seen.pop();
            }
        }
    }

    let mut brute = u32::MAX;
    let mut seen = vec!["A"];
    explore(&graph, "A", 0, &mut seen, &mut brute);
    assert_eq!(brute, best);
}

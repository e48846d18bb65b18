//! Example that runs the solver over the built-in reference graph, prints
//! the distance report, and optionally replays the route step by step.
//!
//! Usage:
//!   cargo run --example route_report
//!   cargo run --example route_report -- B E
//!   cargo run --example route_report -- A F --animate --step-ms 250

use std::process;
use std::thread;
use std::time::Duration;

use clap::Parser;
use wayfinder::prelude::*;

/// Compute and replay a shortest route over the reference graph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start node label
    #[arg(default_value = "A")]
    start: String,

    /// Target node label
    #[arg(default_value = "F")]
    target: String,

    /// Replay the route one node at a time
    #[arg(long)]
    animate: bool,

    /// Milliseconds between replay steps
    #[arg(long, default_value_t = 500)]
    step_ms: u64,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let graph = reference_graph();
    let start = resolve_or_exit(&graph, &args.start);
    let target = resolve_or_exit(&graph, &args.target);

    let result = match graph.shortest_paths(&start) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    match format_report(&result, Some(&target)) {
        Ok(report) => print!("{report}"),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    }

    if args.animate {
        let mut walkthrough = match Walkthrough::new(&graph, &result, &target) {
            Ok(walkthrough) => walkthrough,
            Err(err) => {
                eprintln!("error: {err}");
                process::exit(2);
            }
        };

        println!();
        while let Some(step) = walkthrough.step() {
            match step.edge {
                Some((from, into)) => {
                    let weight = graph.edge_weight(&from, &into).unwrap_or_default();
                    println!("visit {into} (via {from}, weight {weight})");
                }
                None => println!("visit {} (start)", step.node),
            }
            thread::sleep(Duration::from_millis(args.step_ms));
        }

        println!();
        print!("{}", format_walkthrough_summary(&walkthrough));
    }
}

fn resolve_or_exit(
    graph: &AdjacencyGraph<&'static str, u32>,
    label: &str,
) -> &'static str {
    match graph.node_ids().find(|node| *node == label) {
        Some(node) => node,
        None => {
            eprintln!("error: node {label:?} is not in the graph");
            process::exit(2);
        }
    }
}

// src/reporting.rs
//! Console output: graph diagnostics and the ranked result table.
//!
//! Primary output (the score lines) goes to stdout so it can be piped;
//! headers and timing are diagnostics and go to stderr.

use std::time::Duration;

use colored::Colorize;

use crate::graph::Graph;

pub fn print_stats(graph: &Graph) {
    println!("Number of nodes: {}", graph.node_count());
    println!("Number of edges: {}", graph.edge_count());
}

/// Prints the ranked pages, one `<score*100>\t<identifier>` line each,
/// scores formatted to two decimals.
pub fn print_top(top: &[(&str, f64)], requested: usize) {
    eprintln!("{}", format!("Top {requested} pages:").bold());
    for (node, score) in top {
        println!("{:.2}\t{node}", 100.0 * score);
    }
}

pub fn print_elapsed(elapsed: Duration) {
    eprintln!(
        "{}",
        format!("Calculation took {:.2} seconds.", elapsed.as_secs_f64()).dimmed()
    );
}

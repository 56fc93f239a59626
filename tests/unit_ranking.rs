// tests/unit_ranking.rs
//! Tests for top-N selection and its tie-break ordering.

use walkrank_core::graph::Graph;
use walkrank_core::rank::top_n;

fn graph() -> Graph {
    Graph::from_pairs([("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")])
}

#[test]
fn test_sorts_descending_by_score() {
    let g = graph();
    let scores = vec![0.1, 0.4, 0.3, 0.2];
    let top = top_n(&g, &scores, 4);
    let names: Vec<&str> = top.iter().map(|(n, _)| *n).collect();
    assert_eq!(names, vec!["B", "C", "D", "A"]);
}

#[test]
fn test_ties_break_by_identifier_ascending() {
    let g = graph();
    let scores = vec![0.25, 0.25, 0.25, 0.25];
    let top = top_n(&g, &scores, 4);
    let names: Vec<&str> = top.iter().map(|(n, _)| *n).collect();
    assert_eq!(names, vec!["A", "B", "C", "D"], "Equal scores sort by name");
}

#[test]
fn test_truncates_to_n() {
    let g = graph();
    let scores = vec![0.1, 0.4, 0.3, 0.2];
    let top = top_n(&g, &scores, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0], ("B", 0.4));
    assert_eq!(top[1], ("C", 0.3));
}

#[test]
fn test_n_larger_than_graph_returns_everything() {
    let g = graph();
    let scores = vec![0.1, 0.4, 0.3, 0.2];
    let top = top_n(&g, &scores, 20);
    assert_eq!(top.len(), 4, "No padding beyond the node count");
}

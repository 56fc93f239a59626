// src/rank/top.rs
//! Ranking queries over a score vector.

use std::cmp::Ordering;

use crate::graph::Graph;

/// Returns the `n` highest-scoring nodes as (identifier, score) pairs.
///
/// Sorted descending by score; ties break ascending by node identifier
/// so the ordering is deterministic regardless of estimator.
#[must_use]
pub fn top_n<'a>(graph: &'a Graph, scores: &[f64], n: usize) -> Vec<(&'a str, f64)> {
    let mut ranked: Vec<(&str, f64)> = scores
        .iter()
        .enumerate()
        .map(|(id, &score)| (graph.label(id), score))
        .collect();

    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    ranked.truncate(n);
    ranked
}

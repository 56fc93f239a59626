// src/rank/distribution.rs
//! Deterministic `PageRank` estimation by probability propagation.

use crate::error::{RankError, Result};
use crate::graph::Graph;

/// Estimates page ranks by propagating a probability distribution for a
/// fixed number of steps.
///
/// Starts uniform at `1 / node_count`. Each step, every node `u` with
/// probability `p` and out-degree `d` sends `p / d` to each of its
/// targets. Probability mass is conserved by construction, so the result
/// sums to 1.0 at every step with no post-hoc normalization.
///
/// `steps == 0` returns the uniform initial distribution. Nodes are
/// swept in stable index order, so the result is bit-for-bit
/// reproducible for the same graph and step count.
///
/// # Errors
/// `RankError::Config` on an empty graph; `RankError::DanglingNode` if
/// any swept node has no outbound edges (its mass would have nowhere
/// to go).
pub fn distribution_rank(graph: &Graph, steps: usize) -> Result<Vec<f64>> {
    let n = graph.node_count();
    if n == 0 {
        return Err(RankError::Config("graph is empty".to_string()));
    }

    #[allow(clippy::cast_precision_loss)]
    let mut prob = vec![1.0 / n as f64; n];
    let mut next = vec![0.0; n];

    for _ in 0..steps {
        next.iter_mut().for_each(|p| *p = 0.0);

        for u in 0..n {
            let targets = graph.out_edges(u);
            if targets.is_empty() {
                return Err(RankError::DanglingNode(graph.label(u).to_string()));
            }
            #[allow(clippy::cast_precision_loss)]
            let share = prob[u] / targets.len() as f64;
            for &v in targets {
                next[v] += share;
            }
        }

        std::mem::swap(&mut prob, &mut next);
    }

    Ok(prob)
}

// src/rank/stochastic.rs
//! Monte Carlo `PageRank` estimation via repeated random walks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::{RankError, Result};
use crate::graph::Graph;

/// Trials per Rayon task in the parallel estimator.
const PARALLEL_CHUNK: usize = 65_536;

/// Estimates page ranks by counting where independent random walks land.
///
/// Runs `repeats` walks of `steps` uniform transitions each, starting
/// from a uniformly random node, and credits the landing node with
/// `1 / repeats`. Scores sum to 1.0 within floating-point tolerance.
///
/// The RNG is injected so callers can seed for reproducible runs.
///
/// # Errors
/// `RankError::Config` on an empty graph or `repeats == 0`;
/// `RankError::DanglingNode` if a walk reaches a node with no
/// outbound edges (walks are never absorbed or restarted silently).
pub fn stochastic_rank<R: Rng + ?Sized>(
    graph: &Graph,
    repeats: usize,
    steps: usize,
    rng: &mut R,
) -> Result<Vec<f64>> {
    validate(graph, repeats)?;

    #[allow(clippy::cast_precision_loss)]
    let weight = 1.0 / repeats as f64;
    run_trials(graph, repeats, steps, weight, rng)
}

/// Parallel variant: fans trials out over Rayon in fixed-size chunks,
/// each with its own `StdRng` derived from `seed` and the chunk index,
/// then merges chunk histograms by summation in chunk order.
///
/// Deterministic for a given seed and graph. The merge order differs
/// from the serial estimator, so the least-significant bits of the
/// result may differ from [`stochastic_rank`] with the same seed.
///
/// # Errors
/// Same conditions as [`stochastic_rank`].
pub fn stochastic_rank_parallel(
    graph: &Graph,
    repeats: usize,
    steps: usize,
    seed: u64,
) -> Result<Vec<f64>> {
    validate(graph, repeats)?;

    #[allow(clippy::cast_precision_loss)]
    let weight = 1.0 / repeats as f64;
    let chunks = repeats.div_ceil(PARALLEL_CHUNK);

    let histograms: Result<Vec<Vec<f64>>> = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let trials = PARALLEL_CHUNK.min(repeats - chunk * PARALLEL_CHUNK);
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(chunk as u64));
            run_trials(graph, trials, steps, weight, &mut rng)
        })
        .collect();

    let mut merged = vec![0.0; graph.node_count()];
    for histogram in histograms? {
        for (bin, hits) in merged.iter_mut().zip(histogram) {
            *bin += hits;
        }
    }
    Ok(merged)
}

fn validate(graph: &Graph, repeats: usize) -> Result<()> {
    if graph.node_count() == 0 {
        return Err(RankError::Config("graph is empty".to_string()));
    }
    if repeats == 0 {
        return Err(RankError::Config("repeats must be positive".to_string()));
    }
    Ok(())
}

fn run_trials<R: Rng + ?Sized>(
    graph: &Graph,
    trials: usize,
    steps: usize,
    weight: f64,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let n = graph.node_count();
    let mut hits = vec![0.0; n];

    for _ in 0..trials {
        let mut current = rng.gen_range(0..n);
        for _ in 0..steps {
            let targets = graph.out_edges(current);
            if targets.is_empty() {
                return Err(RankError::DanglingNode(graph.label(current).to_string()));
            }
            current = targets[rng.gen_range(0..targets.len())];
        }
        hits[current] += weight;
    }

    Ok(hits)
}

// src/cli/handlers.rs
//! Wires the parsed arguments to the loader, an estimator, and reporting.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::args::{Cli, Method};
use crate::error::Result;
use crate::graph::loader;
use crate::rank::{distribution_rank, stochastic_rank, stochastic_rank_parallel, top_n};
use crate::reporting;

/// Runs one full estimation: load, rank, report.
///
/// # Errors
/// Propagates `RankError` from validation, loading, or the estimator;
/// nothing is printed to stdout after a failure.
pub fn run(cli: &Cli) -> Result<()> {
    cli.validate()?;
    let graph = loader::load(cli.datafile.as_deref())?;
    reporting::print_stats(&graph);

    #[allow(clippy::cast_sign_loss)]
    let (repeats, steps, number) = (
        cli.repeats as usize,
        cli.steps as usize,
        cli.number as usize,
    );

    let started = Instant::now();
    let scores = match cli.method {
        Method::Distribution => distribution_rank(&graph, steps)?,
        Method::Stochastic => run_stochastic(cli, &graph, repeats, steps)?,
    };
    let elapsed = started.elapsed();

    let top = top_n(&graph, &scores, number);
    reporting::print_top(&top, number);
    reporting::print_elapsed(elapsed);
    Ok(())
}

fn run_stochastic(
    cli: &Cli,
    graph: &crate::graph::Graph,
    repeats: usize,
    steps: usize,
) -> Result<Vec<f64>> {
    if cli.parallel {
        let seed = cli.seed.unwrap_or_else(rand::random);
        return stochastic_rank_parallel(graph, repeats, steps, seed);
    }
    match cli.seed {
        Some(seed) => stochastic_rank(graph, repeats, steps, &mut StdRng::seed_from_u64(seed)),
        None => stochastic_rank(graph, repeats, steps, &mut rand::thread_rng()),
    }
}

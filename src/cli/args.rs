// src/cli/args.rs
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::{RankError, Result};

#[derive(Parser)]
#[command(name = "walkrank", version, about = "Estimates page ranks from link information")]
pub struct Cli {
    /// Text file of links among web pages as `source target` pairs (stdin when omitted)
    #[arg(value_name = "DATAFILE")]
    pub datafile: Option<PathBuf>,

    /// Selected page rank algorithm
    #[arg(long, short, value_enum, default_value_t = Method::Stochastic)]
    pub method: Method,

    /// Number of repetitions (stochastic only)
    #[arg(long, short, default_value_t = 1_000_000)]
    pub repeats: i64,

    /// Number of steps a walker takes
    #[arg(long, short, default_value_t = 100)]
    pub steps: i64,

    /// Number of results shown
    #[arg(long, short, default_value_t = 20)]
    pub number: i64,

    /// Seed for the stochastic walker (entropy-seeded when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fan stochastic trials out over the Rayon thread pool
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Stochastic,
    Distribution,
}

impl Cli {
    /// Rejects non-positive counts before any computation starts.
    ///
    /// # Errors
    /// `RankError::Config` naming the offending flag.
    pub fn validate(&self) -> Result<()> {
        require_positive("repeats", self.repeats)?;
        require_positive("steps", self.steps)?;
        require_positive("number", self.number)?;
        Ok(())
    }
}

fn require_positive(flag: &str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(RankError::Config(format!(
            "--{flag} must be positive (got {value})"
        )));
    }
    Ok(())
}

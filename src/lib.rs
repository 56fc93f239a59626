// src/lib.rs
//! `walkrank`: PageRank estimation over directed link graphs.
//!
//! Two estimators over an immutable [`graph::Graph`]:
//! - [`rank::stochastic_rank`]: Monte Carlo random-walk simulation.
//! - [`rank::distribution_rank`]: fixed-step probability propagation.

pub mod cli;
pub mod error;
pub mod exit;
pub mod graph;
pub mod rank;
pub mod reporting;

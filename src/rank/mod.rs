// src/rank/mod.rs
pub mod distribution;
pub mod stochastic;
pub mod top;

pub use distribution::distribution_rank;
pub use stochastic::{stochastic_rank, stochastic_rank_parallel};
pub use top::top_n;

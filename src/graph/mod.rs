// src/graph/mod.rs
pub mod loader;
pub mod model;

pub use model::Graph;

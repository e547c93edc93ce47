//! Guess selection algorithms
//!
//! Entropy scoring, the coverage heuristic, guess space pruning, and the
//! engine that ties them together.

pub mod coverage;
mod engine;
mod entropy;
pub mod pruner;

pub use engine::{Solver, SolverConfig, SolverError};
pub use entropy::expected_information;

//! infoguess
//!
//! An information-theoretic solver for fixed-length word-guessing puzzles.
//! Each turn it picks the guess whose feedback distribution carries the most
//! Shannon entropy over the remaining candidates, with a coverage-based
//! pruning heuristic to keep scoring tractable on large word lists.
//!
//! # Quick Start
//!
//! ```rust
//! use infoguess::core::{Pattern, Word};
//! use infoguess::solver::Solver;
//! use rustc_hash::FxHashMap;
//!
//! let words = vec![
//!     Word::new("crane").unwrap(),
//!     Word::new("slate").unwrap(),
//!     Word::new("grate").unwrap(),
//! ];
//! let solver = Solver::new(words, FxHashMap::default()).unwrap();
//!
//! let candidates = solver.words().to_vec();
//! let (guess, entropy) = solver.choose(&candidates).unwrap();
//! assert!(entropy > 0.0);
//!
//! // Observed feedback narrows the pool for the next turn
//! let hidden = Word::new("slate").unwrap();
//! let feedback = Pattern::calculate(&hidden, &guess);
//! let remaining = solver.filter(&candidates, &guess, feedback).unwrap();
//! assert!(remaining.contains(&hidden));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word list and frequency loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

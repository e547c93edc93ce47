//! Core domain types
//!
//! Fundamental types for words and feedback patterns. Everything here is
//! pure and has clear mathematical properties.

mod pattern;
mod word;

pub use pattern::{PATTERN_COUNT, Pattern, PatternError};
pub use word::{WORD_LEN, Word, WordError};

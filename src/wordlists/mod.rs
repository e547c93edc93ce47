//! Word list and frequency table loading

mod frequency;
mod loader;

pub use frequency::{frequencies_from_text, load_frequencies};
pub use loader::{load_words, words_from_text};

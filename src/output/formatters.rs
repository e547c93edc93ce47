//! Formatting utilities for terminal output

use crate::core::{Pattern, Word};
use colored::Colorize;

/// Render a guess with each letter colored by its feedback state
///
/// Exact letters are green, present letters yellow, absent letters dimmed.
#[must_use]
pub fn colorize_guess(guess: &Word, pattern: Pattern) -> String {
    let states = pattern.states();
    guess
        .text()
        .to_uppercase()
        .chars()
        .zip(states)
        .map(|(ch, state)| match state {
            2 => ch.to_string().bright_green().bold().to_string(),
            1 => ch.to_string().bright_yellow().bold().to_string(),
            _ => ch.to_string().bright_black().to_string(),
        })
        .collect()
}

/// One-line legend explaining the feedback alphabet
#[must_use]
pub fn feedback_legend() -> String {
    format!(
        "Enter feedback as {} letters: {}=exact, {}=present, {}=absent",
        crate::core::WORD_LEN,
        "g".bright_green().bold(),
        "y".bright_yellow().bold(),
        "b".bright_black().bold(),
    )
}

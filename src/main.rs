//! infoguess - CLI
//!
//! Information-theoretic word-guessing solver. Runs an interactive feedback
//! session by default, or simulates a full solve when given an answer.

use anyhow::{Context, Result, bail};
use clap::Parser;
use infoguess::{
    commands::{run_autoplay, run_interactive},
    core::Word,
    output::print_autoplay_report,
    solver::Solver,
    wordlists::{load_frequencies, load_words},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "infoguess",
    about = "Information-theoretic word-guessing solver",
    version
)]
struct Cli {
    /// Path to the list of allowed words
    #[arg(long, default_value = "files/words.txt")]
    words: PathBuf,

    /// Simulate a full solve against the provided answer
    #[arg(long)]
    answer: Option<String>,

    /// Optional path to a cached word frequency table for tie-breaking
    #[arg(long, default_value = "files/words_frequency.txt")]
    frequencies: PathBuf,

    /// Maximum number of guesses to perform
    #[arg(long, default_value_t = 6)]
    max_steps: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(&cli.words)
        .with_context(|| format!("failed to read word list {}", cli.words.display()))?;
    if words.is_empty() {
        bail!("no usable words found in {}", cli.words.display());
    }

    let frequencies = load_frequencies(&cli.frequencies).with_context(|| {
        format!(
            "failed to read frequency table {}",
            cli.frequencies.display()
        )
    })?;

    let solver = Solver::new(words, frequencies)?;

    match cli.answer {
        Some(answer) => {
            let answer = Word::new(answer).context("invalid answer word")?;
            let report = run_autoplay(&solver, &answer, cli.max_steps)?;
            print_autoplay_report(&report);
        }
        None => run_interactive(&solver, cli.max_steps)?,
    }

    Ok(())
}

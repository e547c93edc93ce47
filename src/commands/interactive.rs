//! Interactive session
//!
//! Suggests a guess each turn, reads the observed feedback string from
//! stdin, and narrows the candidate pool until the word is identified.

use crate::core::Pattern;
use crate::output::{colorize_guess, feedback_legend};
use crate::solver::{Solver, SolverError};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive feedback loop for up to `max_steps` turns
///
/// # Errors
/// Returns an error on I/O failure or if the solver cannot produce a guess.
pub fn run_interactive(solver: &Solver, max_steps: usize) -> Result<()> {
    println!("{}", feedback_legend());
    println!("Type 'quit' to exit.\n");

    let mut candidates = solver.words().to_vec();

    for turn in 1..=max_steps {
        let (guess, entropy) = solver.choose(&candidates)?;

        println!(
            "Guess {turn}: {} | entropy={entropy:.3} bits | remaining={}",
            guess.text().to_uppercase().bold(),
            candidates.len(),
        );

        let feedback = loop {
            let input = prompt("Feedback?")?.to_lowercase();
            match input.as_str() {
                "quit" | "q" | "exit" => return Ok(()),
                _ => match Pattern::parse(&input) {
                    Ok(pattern) => break pattern,
                    Err(err) => println!("{} {err}", "Invalid pattern:".bright_red()),
                },
            }
        };

        if feedback.is_perfect() {
            println!(
                "\n{} {}",
                "Word identified:".bright_green().bold(),
                colorize_guess(&guess, feedback),
            );
            return Ok(());
        }

        match solver.filter(&candidates, &guess, feedback) {
            Ok(remaining) => candidates = remaining,
            Err(SolverError::NoCandidatesRemaining) => {
                println!(
                    "{}",
                    "No candidates left. Did the feedback contain a mistake?".bright_red()
                );
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }
    }

    println!("Out of guesses; {} candidates remain.", candidates.len());
    Ok(())
}

/// Read one trimmed line from stdin
fn prompt(label: &str) -> Result<String> {
    print!("{label} ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

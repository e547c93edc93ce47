//! Display functions for command results

use super::formatters::colorize_guess;
use crate::commands::AutoplayReport;
use colored::Colorize;

/// Print the turn-by-turn result of an autoplay run
pub fn print_autoplay_report(report: &AutoplayReport) {
    for (i, step) in report.steps.iter().enumerate() {
        println!(
            "Guess {}: {} | entropy={:.3} bits | search space={} | feedback={}",
            i + 1,
            colorize_guess(&step.guess, step.feedback),
            step.entropy,
            step.pool_size,
            step.feedback,
        );
    }

    if report.solved {
        println!(
            "{}",
            format!(
                "Cracked {} in {} {}",
                report.answer.text().to_uppercase(),
                report.steps.len(),
                if report.steps.len() == 1 {
                    "guess"
                } else {
                    "guesses"
                }
            )
            .bright_green()
            .bold()
        );
    } else {
        println!(
            "{}",
            "Failed to crack the word within the allotted steps."
                .bright_red()
                .bold()
        );
    }
}

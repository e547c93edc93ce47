//! Autoplay driver
//!
//! Simulates a full solve against a known answer, recording one step per
//! turn. Printing is left to the output module so runs stay testable.

use crate::core::{Pattern, Word};
use crate::solver::{Solver, SolverError};

/// One turn of an autoplay run
pub struct AutoplayStep {
    pub guess: Word,
    pub entropy: f64,
    /// Candidate pool size before this guess
    pub pool_size: usize,
    pub feedback: Pattern,
}

/// Result of an autoplay run
pub struct AutoplayReport {
    pub answer: Word,
    pub solved: bool,
    pub steps: Vec<AutoplayStep>,
}

/// Simulate solving `answer`, playing at most `max_steps` guesses
///
/// # Errors
/// Returns `SolverError::NoCandidatesRemaining` if the answer is not in the
/// loaded word list and filtering exhausts the pool.
pub fn run_autoplay(
    solver: &Solver,
    answer: &Word,
    max_steps: usize,
) -> Result<AutoplayReport, SolverError> {
    let mut candidates = solver.words().to_vec();
    let mut steps = Vec::new();

    for _ in 0..max_steps {
        let (guess, entropy) = solver.choose(&candidates)?;
        let feedback = Pattern::calculate(answer, &guess);

        steps.push(AutoplayStep {
            guess: guess.clone(),
            entropy,
            pool_size: candidates.len(),
            feedback,
        });

        if feedback.is_perfect() {
            return Ok(AutoplayReport {
                answer: answer.clone(),
                solved: true,
                steps,
            });
        }

        candidates = solver.filter(&candidates, &guess, feedback)?;
    }

    Ok(AutoplayReport {
        answer: answer.clone(),
        solved: false,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn solver(texts: &[&str]) -> Solver {
        let words = texts.iter().map(|t| Word::new(*t).unwrap()).collect();
        Solver::new(words, FxHashMap::default()).unwrap()
    }

    #[test]
    fn autoplay_solves_word_in_list() {
        let solver = solver(&["crane", "trace", "slate", "plate", "grate"]);
        let answer = Word::new("slate").unwrap();

        let report = run_autoplay(&solver, &answer, 6).unwrap();

        assert!(report.solved);
        assert!(report.steps.len() <= 6);
        let last = report.steps.last().unwrap();
        assert_eq!(last.guess, answer);
        assert!(last.feedback.is_perfect());
    }

    #[test]
    fn autoplay_pool_shrinks_monotonically() {
        let solver = solver(&["crane", "trace", "slate", "plate", "grate"]);
        let answer = Word::new("grate").unwrap();

        let report = run_autoplay(&solver, &answer, 6).unwrap();

        let sizes: Vec<usize> = report.steps.iter().map(|s| s.pool_size).collect();
        assert!(sizes.windows(2).all(|pair| pair[1] <= pair[0]));
    }

    #[test]
    fn autoplay_respects_step_limit() {
        let solver = solver(&["aaaaa", "aabaa", "aabab", "aabbb"]);
        let answer = Word::new("aabbb").unwrap();

        let report = run_autoplay(&solver, &answer, 1).unwrap();
        assert!(report.steps.len() <= 1);
    }

    #[test]
    fn autoplay_answer_outside_list_surfaces_error() {
        let solver = solver(&["aaaaa", "bbbbb"]);
        let answer = Word::new("ccccc").unwrap();

        // Every feedback is all-absent, which eliminates the whole pool
        let result = run_autoplay(&solver, &answer, 6);
        assert_eq!(result.err(), Some(SolverError::NoCandidatesRemaining));
    }
}

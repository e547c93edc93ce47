//! Guess selection engine
//!
//! Owns the loaded word list, the precomputed coverage ranking, and the
//! optional frequency table, and exposes the two per-turn operations: pick
//! the highest-entropy guess and filter the candidate pool after feedback.

use super::coverage::rank_by_coverage;
use super::entropy::expected_information;
use super::pruner::build_guess_pool;
use crate::core::{Pattern, Word};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::fmt;

/// Tunable limits for guess space pruning
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Score the entire word list while candidates <= this many
    pub full_eval_limit: usize,
    /// Pool cap once the candidate set is too large for full evaluation
    pub max_eval_guesses: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            full_eval_limit: 1500,
            max_eval_guesses: 900,
        }
    }
}

/// Errors surfaced by the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// No words available at initialization; fatal for session setup
    EmptyWordList,
    /// The scoring pool ended up empty
    NoGuessAvailable,
    /// Filtering emptied the pool: the feedback sequence is inconsistent
    NoCandidatesRemaining,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list is empty"),
            Self::NoGuessAvailable => write!(f, "No guess available from the scoring pool"),
            Self::NoCandidatesRemaining => {
                write!(f, "No candidates remain; the feedback may contain a mistake")
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// Ordered ranking key for a scored guess
///
/// Entropy dominates; among entropy ties a word that could itself be the
/// answer beats a pure probe; remaining ties break on popularity.
#[derive(Debug, Clone, Copy)]
struct GuessRank {
    entropy: f64,
    is_candidate: bool,
    frequency: f64,
}

impl GuessRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entropy
            .total_cmp(&other.entropy)
            .then_with(|| self.is_candidate.cmp(&other.is_candidate))
            .then_with(|| self.frequency.total_cmp(&other.frequency))
    }
}

/// Entropy-maximizing guess selector
pub struct Solver {
    words: Vec<Word>,
    heuristic_ranking: Vec<Word>,
    frequencies: FxHashMap<String, f64>,
    config: SolverConfig,
}

impl Solver {
    /// Create a solver over a loaded word list with default limits
    ///
    /// The frequency table is tie-break data only; words missing from it
    /// score 0.0.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyWordList` if `words` is empty.
    pub fn new(
        words: Vec<Word>,
        frequencies: FxHashMap<String, f64>,
    ) -> Result<Self, SolverError> {
        Self::with_config(words, frequencies, SolverConfig::default())
    }

    /// Create a solver with explicit pruning limits
    ///
    /// # Errors
    /// Returns `SolverError::EmptyWordList` if `words` is empty.
    pub fn with_config(
        words: Vec<Word>,
        frequencies: FxHashMap<String, f64>,
        config: SolverConfig,
    ) -> Result<Self, SolverError> {
        if words.is_empty() {
            return Err(SolverError::EmptyWordList);
        }

        let heuristic_ranking = rank_by_coverage(&words);
        Ok(Self {
            words,
            heuristic_ranking,
            frequencies,
            config,
        })
    }

    /// The full loaded word list, the initial candidate pool
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Tie-break popularity score for a word, 0.0 when unknown
    #[must_use]
    pub fn frequency_of(&self, word: &Word) -> f64 {
        self.frequencies.get(word.text()).copied().unwrap_or(0.0)
    }

    /// Choose the next guess for the current candidate pool
    ///
    /// Prunes the guess space, scores every pooled word against the full
    /// candidate set in parallel, and returns the guess maximizing
    /// `(entropy, is_candidate, frequency)`. Full ties resolve to the
    /// earliest word in pool order, so selection is deterministic.
    ///
    /// # Errors
    /// Returns `SolverError::NoGuessAvailable` if the scoring pool is empty,
    /// which cannot happen once construction rejected an empty word list.
    pub fn choose(&self, candidates: &[Word]) -> Result<(Word, f64), SolverError> {
        let pool = build_guess_pool(
            candidates,
            &self.words,
            &self.heuristic_ranking,
            self.config.full_eval_limit,
            self.config.max_eval_guesses,
        );

        let candidate_set: FxHashSet<&str> = candidates.iter().map(Word::text).collect();

        pool.par_iter()
            .enumerate()
            .map(|(index, guess)| {
                let rank = GuessRank {
                    entropy: expected_information(guess, candidates),
                    is_candidate: candidate_set.contains(guess.text()),
                    frequency: self.frequency_of(guess),
                };
                (index, guess, rank)
            })
            .max_by(|(i, _, a), (j, _, b)| match a.cmp(b) {
                // Equal keys: the lower pool index wins
                Ordering::Equal => j.cmp(i),
                ordering => ordering,
            })
            .map(|(_, guess, rank)| (guess.clone(), rank.entropy))
            .ok_or(SolverError::NoGuessAvailable)
    }

    /// Filter the candidate pool after observing feedback for a guess
    ///
    /// Keeps exactly the words that would have produced `feedback` against
    /// `guess`, preserving order. This is the sole pool mutation between
    /// turns; the pool only ever shrinks.
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidatesRemaining` if nothing survives,
    /// which means the observed feedback sequence is internally inconsistent.
    pub fn filter(
        &self,
        candidates: &[Word],
        guess: &Word,
        feedback: Pattern,
    ) -> Result<Vec<Word>, SolverError> {
        let remaining: Vec<Word> = candidates
            .iter()
            .filter(|word| Pattern::calculate(word, guess) == feedback)
            .cloned()
            .collect();

        if remaining.is_empty() {
            return Err(SolverError::NoCandidatesRemaining);
        }
        Ok(remaining)
    }
}

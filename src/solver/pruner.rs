//! Guess space pruning
//!
//! Entropy evaluation costs O(|pool| × |candidates|), which is fine until the
//! candidate pool is huge. Below `full_eval_limit` candidates every legal word
//! is scored; above it the pool is capped at `max_eval_guesses`: half drawn
//! from the candidates themselves ranked by candidate-local letter coverage,
//! the rest filled from the precomputed global coverage ranking so that
//! strong probe words outside the candidate set stay in play.

use super::coverage::{coverage_score, letter_frequencies};
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Build the pool of words worth scoring as the next guess
///
/// `heuristic_ranking` is the full word list ranked once at load time by
/// letter coverage over the whole list.
#[must_use]
pub fn build_guess_pool(
    candidates: &[Word],
    all_words: &[Word],
    heuristic_ranking: &[Word],
    full_eval_limit: usize,
    max_eval_guesses: usize,
) -> Vec<Word> {
    if candidates.len() <= full_eval_limit {
        return all_words.to_vec();
    }

    let mut pool = top_candidates_by_coverage(candidates, max_eval_guesses / 2);
    let mut seen: FxHashSet<String> = pool.iter().map(|w| w.text().to_string()).collect();

    for word in heuristic_ranking {
        if pool.len() >= max_eval_guesses {
            break;
        }
        if seen.contains(word.text()) {
            continue;
        }
        seen.insert(word.text().to_string());
        pool.push(word.clone());
    }

    pool
}

/// Top `cap` candidates ranked by coverage over the candidate set itself
///
/// Ranking over the current candidates (rather than the full list) biases
/// toward guesses that best split the remaining possibilities.
fn top_candidates_by_coverage(candidates: &[Word], cap: usize) -> Vec<Word> {
    if candidates.len() <= cap {
        return candidates.to_vec();
    }

    let freqs = letter_frequencies(candidates);
    let mut ranked: Vec<Word> = candidates.to_vec();
    ranked.sort_by(|a, b| coverage_score(b, &freqs).cmp(&coverage_score(a, &freqs)));
    ranked.truncate(cap);
    ranked
}

//! Shannon entropy scoring for candidate guesses
//!
//! A guess partitions the candidate pool by the feedback pattern each
//! candidate would produce. The entropy of that partition is the expected
//! information gained by playing the guess.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Expected information (in bits) from playing `guess` against `candidates`
///
/// # Formula
/// H = -Σ p(k) * log₂(p(k)) over the observed pattern buckets k.
///
/// # Properties
/// - Always >= 0.
/// - Zero iff every candidate produces the same pattern, i.e. the guess
///   cannot narrow the pool at all.
/// - Bounded above by log₂(|candidates|).
///
/// # Examples
/// ```
/// use infoguess::core::Word;
/// use infoguess::solver::expected_information;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let bits = expected_information(&guess, &candidates);
/// assert!(bits > 0.0 && bits <= 1.0); // two candidates, at most 1 bit
/// ```
#[must_use]
pub fn expected_information(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let mut buckets: FxHashMap<Pattern, usize> = FxHashMap::default();
    for candidate in candidates {
        *buckets
            .entry(Pattern::calculate(candidate, guess))
            .or_insert(0) += 1;
    }

    let total = candidates.len() as f64;
    buckets
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn entropy_zero_when_all_candidates_indistinguishable() {
        // Every candidate produces the all-absent pattern against zzzzz
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);

        let bits = expected_information(&guess, &candidates);
        assert!(bits.abs() < 1e-12);
    }

    #[test]
    fn entropy_one_bit_for_even_split() {
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz"]);

        let bits = expected_information(&guess, &candidates);
        assert!((bits - 1.0).abs() < 1e-9);
    }

    #[test]
    fn entropy_two_bits_for_uniform_four_way_split() {
        // aaaaa, baaaa, bbaaa, bbbaa each give a distinct green-count
        // pattern against the guess, so the split is uniform four ways
        let guess = Word::new("aaaaa").unwrap();
        let candidates = words(&["aaaaa", "baaaa", "bbaaa", "bbbaa"]);

        let bits = expected_information(&guess, &candidates);
        assert!((bits - 2.0).abs() < 1e-9);
    }

    #[test]
    fn entropy_bounds() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "irate", "trace", "raise", "crane"]);

        let bits = expected_information(&guess, &candidates);
        assert!(bits >= 0.0);
        assert!(bits <= (candidates.len() as f64).log2() + 1e-9);
    }

    #[test]
    fn entropy_finer_partition_scores_higher() {
        let pool = words(&["aaaaa", "baaaa", "bbaaa", "zzzzz"]);

        // Splits the pool into four singleton buckets
        let fine = Word::new("aaaaa").unwrap();
        // Lumps baaaa and bbaaa into one bucket
        let coarse = Word::new("bzzzz").unwrap();

        let h_fine = expected_information(&fine, &pool);
        let h_coarse = expected_information(&coarse, &pool);
        assert!((h_fine - 2.0).abs() < 1e-9);
        assert!((h_coarse - 1.5).abs() < 1e-9);
    }

    #[test]
    fn entropy_empty_candidates() {
        let guess = Word::new("crane").unwrap();
        assert!(expected_information(&guess, &[]).abs() < f64::EPSILON);
    }
}

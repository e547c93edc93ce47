//! Letter-coverage heuristic ranking
//!
//! Scores a word by how many words in a reference set share its distinct
//! letters. Words covering common letters rank first, which makes them good
//! cheap probes when full entropy evaluation is too expensive.

use crate::core::Word;

/// Per-letter counts of how many words in `words` contain each letter
///
/// Each word contributes at most once per letter (set semantics).
#[must_use]
pub fn letter_frequencies(words: &[Word]) -> [u32; 26] {
    let mut freqs = [0u32; 26];
    for word in words {
        let mut seen = [false; 26];
        for &b in word.bytes() {
            let slot = usize::from(b - b'a');
            if !seen[slot] {
                seen[slot] = true;
                freqs[slot] += 1;
            }
        }
    }
    freqs
}

/// Coverage score of a word against precomputed letter frequencies
///
/// Sum over the word's distinct letters of the frequency of each letter.
/// Repeated letters count once.
#[must_use]
pub fn coverage_score(word: &Word, freqs: &[u32; 26]) -> u32 {
    let mut seen = [false; 26];
    let mut total = 0;
    for &b in word.bytes() {
        let slot = usize::from(b - b'a');
        if !seen[slot] {
            seen[slot] = true;
            total += freqs[slot];
        }
    }
    total
}

/// Rank words by descending coverage score over the set itself
///
/// The sort is stable, so equal-scoring words keep their load order.
#[must_use]
pub fn rank_by_coverage(words: &[Word]) -> Vec<Word> {
    let freqs = letter_frequencies(words);
    let mut ranked: Vec<Word> = words.to_vec();
    ranked.sort_by(|a, b| coverage_score(b, &freqs).cmp(&coverage_score(a, &freqs)));
    ranked
}

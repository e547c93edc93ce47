//! Frequency table loading
//!
//! An optional `word value` table used only for tie-breaking between
//! equal-entropy guesses. The table is best-effort: a missing file means an
//! empty map, and malformed lines are skipped rather than rejected.

use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Parse a frequency table from text, one `word value` pair per line
#[must_use]
pub fn frequencies_from_text(content: &str) -> FxHashMap<String, f64> {
    let mut frequencies = FxHashMap::default();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let (Some(word), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        let Ok(value) = value.parse::<f64>() else {
            continue;
        };
        frequencies.insert(word.to_lowercase(), value);
    }
    frequencies
}

/// Load a frequency table from a file
///
/// A nonexistent file is not an error; the table is optional and an empty
/// map simply disables the popularity tie-break.
///
/// # Errors
/// Returns an I/O error if an existing file cannot be read.
pub fn load_frequencies<P: AsRef<Path>>(path: P) -> io::Result<FxHashMap<String, f64>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(FxHashMap::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(frequencies_from_text(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequencies_from_text_parses_pairs() {
        let table = frequencies_from_text("crane 5.23\nslate 4.87\n");
        assert_eq!(table.len(), 2);
        assert!((table["crane"] - 5.23).abs() < 1e-12);
        assert!((table["slate"] - 4.87).abs() < 1e-12);
    }

    #[test]
    fn frequencies_from_text_skips_malformed_lines() {
        let table = frequencies_from_text("crane 5.23\njustaword\nslate not-a-number\n\n");
        assert_eq!(table.len(), 1);
        assert!(table.contains_key("crane"));
    }

    #[test]
    fn frequencies_from_text_lowercases_words() {
        let table = frequencies_from_text("CRANE 5.23\n");
        assert!(table.contains_key("crane"));
    }

    #[test]
    fn load_frequencies_missing_file_is_empty() {
        let table = load_frequencies("no/such/frequency/table.txt").unwrap();
        assert!(table.is_empty());
    }
}

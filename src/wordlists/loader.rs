//! Word list loading
//!
//! Loads the legal word list from a plain text file, one word per line.
//! Words that do not match the configured length are dropped here, before
//! they ever reach the solver.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Parse words out of word list text, skipping invalid entries
///
/// Lines are trimmed and lowercased; blank lines and words of the wrong
/// length or with non-letter characters are ignored.
#[must_use]
pub fn words_from_text(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use infoguess::wordlists::load_words;
///
/// let words = load_words("files/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_text_keeps_valid_words() {
        let words = words_from_text("crane\nslate\nirate\n");
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_text_skips_invalid_entries() {
        let words = words_from_text("crane\ntoolong\nabc\n\n  slate  \n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate"]);
    }

    #[test]
    fn words_from_text_normalizes_case() {
        let words = words_from_text("CRANE\nSlate\n");
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_text_empty_input() {
        assert!(words_from_text("").is_empty());
        assert!(words_from_text("\n\n\n").is_empty());
    }
}

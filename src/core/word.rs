//! Word representation
//!
//! A `Word` is exactly `WORD_LEN` ASCII lowercase letters, normalized on
//! construction and immutable afterwards.

use std::fmt;

/// Configured word length for a run
pub const WORD_LEN: usize = 5;

/// A fixed-length puzzle word
///
/// Stores the normalized text alongside its byte form for cheap per-position
/// access during pattern calculation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    bytes: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// Word length does not match `WORD_LEN`
    InvalidLength(usize),
    /// Word contains characters outside ASCII a-z
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new `Word` from a string, normalizing case
    ///
    /// # Errors
    /// Returns `WordError` if the length is not exactly `WORD_LEN` or any
    /// character is outside ASCII a-z after lowercasing.
    ///
    /// # Examples
    /// ```
    /// use infoguess::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("toolong").is_err());
    /// assert!(Word::new("cran3").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let bytes: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Ok(Self { text, bytes })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn bytes(&self) -> &[u8; WORD_LEN] {
        &self.bytes
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

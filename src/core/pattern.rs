//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback for a guess using base-3 encoding:
//! - 0 = absent (letter not in word)
//! - 1 = present (letter in word, wrong position)
//! - 2 = exact (letter in correct position)
//!
//! The pattern is stored as a single integer in `[0, 3^WORD_LEN - 1]`, with
//! the most-significant base-3 digit holding the first letter position. Its
//! textual form uses one symbol per position: `b` (absent), `y` (present),
//! `g` (exact).

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Number of distinct feedback patterns (`3^WORD_LEN`)
pub const PATTERN_COUNT: u16 = 3u16.pow(WORD_LEN as u32);

/// Pattern symbols indexed by digit value
const SYMBOLS: [char; 3] = ['b', 'y', 'g'];

/// Feedback pattern for a guess against a hidden word
///
/// Value range: 0-242 for the default five-letter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Feedback string length does not match `WORD_LEN`
    InvalidLength(usize),
    /// Feedback string contains a symbol outside `b`/`y`/`g`
    InvalidSymbol(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Pattern must be exactly {WORD_LEN} symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Pattern may only contain g, y, or b, got '{ch}'")
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// All exact (perfect match), the code `3^WORD_LEN - 1`
    pub const PERFECT: Self = Self((PATTERN_COUNT - 1) as u8);

    /// Create a new pattern from a raw code
    ///
    /// # Panics
    /// Panics in debug mode if the code is out of range.
    #[inline]
    #[must_use]
    pub const fn new(code: u8) -> Self {
        debug_assert!((code as u16) < PATTERN_COUNT, "pattern code out of range");
        Self(code)
    }

    /// Get the raw pattern code
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all exact)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern produced when `guess` is played against `hidden`
    ///
    /// Implements the standard duplicate-letter rules with two passes:
    /// 1. Mark exact matches and pool the unmatched hidden letters.
    /// 2. Left to right, mark a position present only while its letter has
    ///    remaining count in the pool, decrementing as it goes.
    ///
    /// A guessed letter is therefore marked present at most as many times as
    /// it has unmatched occurrences in the hidden word.
    ///
    /// # Examples
    /// ```
    /// use infoguess::core::{Pattern, Word};
    ///
    /// let hidden = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    ///
    /// // c(absent) r(absent) a(exact) n(absent) e(exact)
    /// // digits 0,0,2,0,2 -> 0*81 + 0*27 + 2*9 + 0*3 + 2 = 20
    /// assert_eq!(Pattern::calculate(&hidden, &guess).code(), 20);
    /// ```
    #[must_use]
    pub fn calculate(hidden: &Word, guess: &Word) -> Self {
        let mut states = [0u8; WORD_LEN];
        let mut pool = [0u8; 26];

        // First pass: exact matches; everything else feeds the letter pool
        for i in 0..WORD_LEN {
            if guess.bytes()[i] == hidden.bytes()[i] {
                states[i] = 2;
            } else {
                pool[usize::from(hidden.bytes()[i] - b'a')] += 1;
            }
        }

        // Second pass: present while the pool still has that letter
        for i in 0..WORD_LEN {
            if states[i] != 0 {
                continue;
            }
            let slot = usize::from(guess.bytes()[i] - b'a');
            if pool[slot] > 0 {
                states[i] = 1;
                pool[slot] -= 1;
            }
        }

        // Pack base-3, most-significant digit first
        let mut code = 0u8;
        for &state in &states {
            code = code * 3 + state;
        }
        Self(code)
    }

    /// Parse a feedback string like "bygbb"
    ///
    /// Accepts `g`/`y`/`b` in either case.
    ///
    /// # Errors
    /// Returns `PatternError` if the string is the wrong length or contains a
    /// symbol outside the pattern alphabet.
    ///
    /// # Examples
    /// ```
    /// use infoguess::core::Pattern;
    ///
    /// let pattern = Pattern::parse("bygbb").unwrap();
    /// assert_eq!(pattern.code(), 45);
    /// assert!(Pattern::parse("bxgbb").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LEN {
            return Err(PatternError::InvalidLength(chars.len()));
        }

        let mut code = 0u8;
        for ch in chars {
            let state = match ch.to_ascii_lowercase() {
                'b' => 0,
                'y' => 1,
                'g' => 2,
                _ => return Err(PatternError::InvalidSymbol(ch)),
            };
            code = code * 3 + state;
        }
        Ok(Self(code))
    }

    /// Render the pattern as its feedback string
    ///
    /// The least-significant digit fills the last position, the inverse of
    /// [`Pattern::parse`].
    #[must_use]
    pub fn to_feedback_string(self) -> String {
        let mut chars = ['b'; WORD_LEN];
        let mut code = self.0;
        for slot in chars.iter_mut().rev() {
            *slot = SYMBOLS[usize::from(code % 3)];
            code /= 3;
        }
        chars.iter().collect()
    }

    /// Per-position states, first letter first
    #[must_use]
    pub fn states(self) -> [u8; WORD_LEN] {
        let mut states = [0u8; WORD_LEN];
        let mut code = self.0;
        for slot in states.iter_mut().rev() {
            *slot = code % 3;
            code /= 3;
        }
        states
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_feedback_string())
    }
}

//! Word representation
//!
//! A Word is a validated, lowercase, fixed-length string of ASCII letters.
//! Both guesses and targets are Words.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Letter count used when no other limit is configured
pub const DEFAULT_LETTER_LIMIT: usize = 5;

/// A lowercase word of `a`-`z` letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Box<[u8]>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word of the default letter limit
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly 5 ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_limit(text, DEFAULT_LETTER_LIMIT)
    }

    /// Create a new Word that must have exactly `letter_limit` letters
    ///
    /// Input is lowercased before validation. Length is counted in characters,
    /// so a wrong-length word is reported as such even if it is not ASCII.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `letter_limit`
    /// - Contains non-ASCII characters
    /// - Contains characters outside `a`-`z`
    pub fn with_limit(text: impl Into<String>, letter_limit: usize) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let actual = text.chars().count();
        if actual != letter_limit {
            return Err(WordError::InvalidLength {
                expected: letter_limit,
                actual,
            });
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars = text.as_bytes().into();
        Ok(Self { text, chars })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Only true for a zero-letter word, which needs a zero letter limit
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Occurrences of each letter
    ///
    /// Bounds how many misplaced hits a repeated guess letter can earn.
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

//! Guess evaluation and feedback representation
//!
//! Each position of a guess is classified as one of:
//! - `Absent` (letter not in target, or all its occurrences already credited)
//! - `Present` (letter in target, wrong position)
//! - `Correct` (letter in correct position)
//!
//! The variants are ordered `Absent < Present < Correct`, which is the
//! precedence used when aggregating keyboard hints.

use super::Word;
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterMatch {
    Absent,
    Present,
    Correct,
}

impl LetterMatch {
    /// Emoji square for this match
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-character code: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterMatch>);

impl Feedback {
    /// Evaluate `guess` against `target`
    ///
    /// Implements the exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. Count every letter of the target
    /// 2. First pass: mark exact matches and remove them from the pool
    /// 3. Second pass: mark present-but-misplaced letters while the pool has them
    ///
    /// Both words must have the same length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterMatch, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// // S(present) P(absent) E(present) E(present) D(absent)
    /// assert_eq!(feedback.to_string(), "Y-YY-");
    /// assert_eq!(feedback.count_present(), 3);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "guess and target differ in length");

        let mut result = vec![LetterMatch::Absent; guess.len()];
        let mut target_available = target.char_counts();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = LetterMatch::Correct;
                if let Some(count) = target_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, bounded by what is left in the pool
        for (i, &letter) in guess.chars().iter().enumerate() {
            if result[i] == LetterMatch::Correct {
                continue;
            }
            if let Some(count) = target_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterMatch::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-position matches in guess order
    #[inline]
    #[must_use]
    pub fn matches(&self) -> &[LetterMatch] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == LetterMatch::Correct)
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&m| m == LetterMatch::Correct).count()
    }

    /// Count the number of present-but-misplaced positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == LetterMatch::Present).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// let f1 = Feedback::from_str("GY-GY").unwrap();
    /// let f2 = Feedback::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // FromStr is implemented below as well
    pub fn from_str(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        s.chars()
            .map(LetterMatch::from_char)
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.0 {
            write!(f, "{}", m.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

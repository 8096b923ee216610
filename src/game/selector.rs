//! Target word selection
//!
//! Derives the hidden word for a session: by calendar date, uniformly at
//! random, or from a player-supplied custom word.

use super::GameError;
use crate::core::Word;
use crate::wordlists::Dictionary;
use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day zero of the word-of-the-day sequence
pub const DEFAULT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 8, 1) {
    Some(date) => date,
    None => panic!("invalid epoch date"),
};

/// How the target word of a session is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameMode {
    WordOfTheDay,
    Random,
    Custom,
}

impl GameMode {
    pub const ALL: [Self; 3] = [Self::WordOfTheDay, Self::Random, Self::Custom];

    /// Human-readable name
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::WordOfTheDay => "Word of the day",
            Self::Random => "Random word",
            Self::Custom => "Custom word",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A request for a session target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetRequest {
    /// Word of the day for the given UTC calendar date
    WordOfTheDay(NaiveDate),
    Random,
    /// Player-supplied word, validated on selection
    Custom(String),
}

impl TargetRequest {
    /// Word of the day for the current UTC date
    #[must_use]
    pub fn today() -> Self {
        Self::WordOfTheDay(Utc::now().date_naive())
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        match self {
            Self::WordOfTheDay(_) => GameMode::WordOfTheDay,
            Self::Random => GameMode::Random,
            Self::Custom(_) => GameMode::Custom,
        }
    }
}

/// Picks target words from a dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSelector {
    epoch: NaiveDate,
}

impl Default for WordSelector {
    fn default() -> Self {
        Self::new(DEFAULT_EPOCH)
    }
}

impl WordSelector {
    #[must_use]
    pub const fn new(epoch: NaiveDate) -> Self {
        Self { epoch }
    }

    #[must_use]
    pub const fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Whole days between the epoch and `today`, negative before the epoch
    #[must_use]
    pub fn day_index(&self, today: NaiveDate) -> i64 {
        (today - self.epoch).num_days()
    }

    /// Deterministic word for a calendar day
    ///
    /// The day index wraps modulo the dictionary length, so the sequence
    /// repeats once every word has been used and never runs out of bounds.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use wordle_game::game::WordSelector;
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["crane", "slate", "audio"], 5).unwrap();
    /// let selector = WordSelector::new(NaiveDate::from_ymd_opt(2024, 8, 1).unwrap());
    ///
    /// let day = |d| NaiveDate::from_ymd_opt(2024, 8, d).unwrap();
    /// assert_eq!(selector.word_of_day(&dictionary, day(1)).text(), "crane");
    /// assert_eq!(selector.word_of_day(&dictionary, day(3)).text(), "audio");
    /// assert_eq!(selector.word_of_day(&dictionary, day(4)).text(), "crane");
    /// ```
    #[must_use]
    pub fn word_of_day<'d>(&self, dictionary: &'d Dictionary, today: NaiveDate) -> &'d Word {
        let len = dictionary.len() as i64;
        let index = self.day_index(today).rem_euclid(len) as usize;
        &dictionary.words()[index]
    }

    /// Uniformly random dictionary word
    pub fn random_word<'d, R: Rng + ?Sized>(dictionary: &'d Dictionary, rng: &mut R) -> &'d Word {
        let index = rng.random_range(0..dictionary.len());
        &dictionary.words()[index]
    }

    /// Validate a player-supplied target
    ///
    /// Surrounding whitespace is trimmed and letters are lowercased.
    ///
    /// # Errors
    /// Returns `GameError::InvalidCustomWord` if the text is not exactly
    /// `letter_limit` letters from `a`-`z`.
    pub fn custom_word(text: &str, letter_limit: usize) -> Result<Word, GameError> {
        Word::with_limit(text.trim(), letter_limit).map_err(|_| GameError::InvalidCustomWord {
            text: text.to_string(),
            letter_limit,
        })
    }

    /// Resolve a request to an owned target word
    ///
    /// # Errors
    /// Returns `GameError::InvalidCustomWord` for an unusable custom word.
    pub fn select<R: Rng + ?Sized>(
        &self,
        dictionary: &Dictionary,
        request: &TargetRequest,
        rng: &mut R,
    ) -> Result<Word, GameError> {
        match request {
            TargetRequest::WordOfTheDay(today) => Ok(self.word_of_day(dictionary, *today).clone()),
            TargetRequest::Random => Ok(Self::random_word(dictionary, rng).clone()),
            TargetRequest::Custom(text) => Self::custom_word(text, dictionary.letter_limit()),
        }
    }
}

//! Game session state machine
//!
//! A `Session` plays one target word. Guesses are validated against the
//! effective dictionary (the base dictionary plus the custom target, for
//! custom sessions), scored by the evaluator and folded into the keyboard
//! aggregate until the player wins or runs out of rows.

use super::GameError;
use super::selector::{GameMode, TargetRequest, WordSelector};
use crate::core::{Feedback, KeyboardState, Word};
use crate::wordlists::Dictionary;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Number of guesses allowed when no other limit is configured
pub const DEFAULT_ROWS: usize = 6;

/// Result reported once per finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Lose,
}

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Receives the result of every finished game
pub trait OutcomeListener {
    fn on_outcome(&mut self, mode: GameMode, result: GameResult);
}

impl<F: FnMut(GameMode, GameResult)> OutcomeListener for F {
    fn on_outcome(&mut self, mode: GameMode, result: GameResult) {
        self(mode, result);
    }
}

/// One accepted guess and its evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// Owned view of a session for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub mode: GameMode,
    pub rows: usize,
    pub letter_limit: usize,
    pub current_guess: usize,
    pub guesses: Vec<GuessRecord>,
    pub keyboard: KeyboardState,
    pub outcome: Outcome,
    /// Revealed only once the game is over
    pub answer: Option<Word>,
}

/// A single game against one target word
#[derive(Debug, Clone)]
pub struct Session<'d> {
    dictionary: &'d Dictionary,
    mode: GameMode,
    target: Word,
    rows: usize,
    guesses: Vec<GuessRecord>,
    keyboard: KeyboardState,
    outcome: Outcome,
}

impl<'d> Session<'d> {
    /// Start a session for the requested mode
    ///
    /// # Errors
    /// - `NoRows` if `rows` is zero
    /// - `InvalidCustomWord` if a custom target is unusable
    pub fn start<R: Rng + ?Sized>(
        dictionary: &'d Dictionary,
        selector: &WordSelector,
        request: &TargetRequest,
        rows: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if rows == 0 {
            return Err(GameError::NoRows);
        }
        let target = selector.select(dictionary, request, rng)?;
        let session = Self::with_target(dictionary, request.mode(), target, rows)?;
        info!(mode = %session.mode, rows, "session started");
        Ok(session)
    }

    /// Start a session against a known target, bypassing selection
    ///
    /// # Errors
    /// Returns `GameError::NoRows` if `rows` is zero.
    pub fn with_target(
        dictionary: &'d Dictionary,
        mode: GameMode,
        target: Word,
        rows: usize,
    ) -> Result<Self, GameError> {
        if rows == 0 {
            return Err(GameError::NoRows);
        }

        Ok(Self {
            dictionary,
            mode,
            target,
            rows,
            guesses: Vec::with_capacity(rows),
            keyboard: KeyboardState::new(),
            outcome: Outcome::InProgress,
        })
    }

    /// Submit a guess
    ///
    /// On success the guess is scored and recorded, and the listener is told
    /// about the result if this guess ended the game. On error nothing changes.
    ///
    /// # Errors
    /// - `GameAlreadyOver` if the session is won or lost
    /// - `IncompleteGuess` if the guess has the wrong number of letters
    /// - `UnknownWord` if the guess is not in the effective dictionary
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameMode, GameResult, Outcome, Session};
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["hello", "crane"], 5).unwrap();
    /// let target = Word::new("hello").unwrap();
    /// let mut session = Session::with_target(&dictionary, GameMode::Random, target, 6).unwrap();
    ///
    /// let mut results = Vec::new();
    /// let snapshot = session
    ///     .submit_guess("hello", &mut |_mode: GameMode, result: GameResult| results.push(result))
    ///     .unwrap();
    ///
    /// assert_eq!(snapshot.outcome, Outcome::Won);
    /// assert_eq!(results, [GameResult::Win]);
    /// ```
    pub fn submit_guess<L: OutcomeListener + ?Sized>(
        &mut self,
        text: &str,
        listener: &mut L,
    ) -> Result<SessionSnapshot, GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let text = text.trim().to_lowercase();
        let letter_limit = self.letter_limit();
        let actual = text.chars().count();
        if actual != letter_limit {
            debug!(guess = %text, "rejected incomplete guess");
            return Err(GameError::IncompleteGuess {
                expected: letter_limit,
                actual,
            });
        }

        if !self.is_valid_guess(&text) {
            debug!(guess = %text, "rejected unknown word");
            return Err(GameError::UnknownWord(text));
        }

        let word = Word::with_limit(text.as_str(), letter_limit)
            .map_err(|_| GameError::UnknownWord(text.clone()))?;
        let feedback = Feedback::calculate(&word, &self.target);
        self.keyboard.record(&word, &feedback);

        let solved = word == self.target;
        debug!(
            guess = %word,
            feedback = %feedback,
            attempt = self.guesses.len() + 1,
            "guess accepted"
        );
        self.guesses.push(GuessRecord { word, feedback });

        if solved {
            self.finish(Outcome::Won, GameResult::Win, listener);
        } else if self.guesses.len() >= self.rows {
            self.finish(Outcome::Lost, GameResult::Lose, listener);
        }

        Ok(self.snapshot())
    }

    /// Replace this game with a fresh one for the requested mode
    ///
    /// Always permitted, including after a finished game. If selection fails
    /// the current session is kept unchanged.
    ///
    /// # Errors
    /// Returns `GameError::InvalidCustomWord` if a custom target is unusable.
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        selector: &WordSelector,
        request: &TargetRequest,
        rng: &mut R,
    ) -> Result<(), GameError> {
        let target = selector.select(self.dictionary, request, rng)?;
        self.mode = request.mode();
        self.target = target;
        self.guesses.clear();
        self.keyboard.clear();
        self.outcome = Outcome::InProgress;
        info!(mode = %self.mode, "session reset");
        Ok(())
    }

    /// Membership in the effective dictionary
    #[must_use]
    pub fn is_valid_guess(&self, text: &str) -> bool {
        self.dictionary.contains(text)
            || (self.mode == GameMode::Custom && self.target.text() == text)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            rows: self.rows,
            letter_limit: self.letter_limit(),
            current_guess: self.guesses.len(),
            guesses: self.guesses.clone(),
            keyboard: self.keyboard.clone(),
            outcome: self.outcome,
            answer: self.outcome.is_over().then(|| self.target.clone()),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Number of guesses made so far
    #[must_use]
    pub fn current_guess(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn letter_limit(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// The hidden word, for debug display
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    fn finish<L: OutcomeListener + ?Sized>(
        &mut self,
        outcome: Outcome,
        result: GameResult,
        listener: &mut L,
    ) {
        self.outcome = outcome;
        info!(mode = %self.mode, ?result, guesses = self.guesses.len(), "game over");
        listener.on_outcome(self.mode, result);
    }
}

//! Wordle Game
//!
//! A word guessing game: guess the hidden five-letter word in six tries, with
//! per-letter feedback after each guess. Supports a deterministic word of the
//! day, random words and shareable custom words.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameMode, GameResult, Outcome, Session, DEFAULT_ROWS};
//! use wordle_game::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_strs(&["crane", "slate", "hello"], 5).unwrap();
//! let target = Word::new("hello").unwrap();
//! let mut session =
//!     Session::with_target(&dictionary, GameMode::Random, target, DEFAULT_ROWS).unwrap();
//!
//! let mut results = Vec::new();
//! let mut listener = |mode: GameMode, result: GameResult| results.push((mode, result));
//!
//! let snapshot = session.submit_guess("crane", &mut listener).unwrap();
//! println!("{}", snapshot.guesses[0].feedback.to_emoji());
//!
//! let snapshot = session.submit_guess("hello", &mut listener).unwrap();
//! assert_eq!(snapshot.outcome, Outcome::Won);
//! assert_eq!(results, vec![(GameMode::Random, GameResult::Win)]);
//! ```

// Core domain types
pub mod core;

// Target selection and the game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Win/loss tallies and persistence
pub mod stats;

// Share links
pub mod share;

// User configuration
pub mod config;

// Log file setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

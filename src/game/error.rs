//! Game errors
//!
//! Every variant is recoverable: the caller shows a message and the session
//! is left exactly as it was.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Not enough letters!")]
    IncompleteGuess { expected: usize, actual: usize },

    #[error("Not a valid word!")]
    UnknownWord(String),

    #[error("Custom word must be {letter_limit} letters a-z, got '{text}'")]
    InvalidCustomWord { text: String, letter_limit: usize },

    #[error("A game needs at least one row")]
    NoRows,

    #[error("The game is already over")]
    GameAlreadyOver,
}

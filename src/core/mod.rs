//! Core domain types for the word game
//!
//! This module contains the fundamental domain types: words, guess feedback and
//! the keyboard aggregate. All types here are pure and have no I/O.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterMatch};
pub use keyboard::{ALPHABET, KeyboardState};
pub use word::{DEFAULT_LETTER_LIMIT, Word, WordError};

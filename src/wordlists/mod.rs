//! Word lists for the game
//!
//! Provides the embedded dictionary compiled into the binary, loaders for
//! external lists, and the `Dictionary` used to validate guesses.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError};
pub use embedded::{WORDS, WORDS_COUNT};

//! Terminal output formatting
//!
//! Display utilities for the line-mode game and one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard, print_outcome, print_statistics, print_word_of_day};

//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterMatch, Word};
use colored::{ColoredString, Colorize};

/// Color one letter by its match state; unknown letters stay plain
#[must_use]
pub fn colorize_letter(letter: char, state: Option<LetterMatch>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        Some(LetterMatch::Correct) => text.black().on_green().bold(),
        Some(LetterMatch::Present) => text.black().on_yellow().bold(),
        Some(LetterMatch::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A guessed word with each letter colored by its feedback
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.matches())
        .map(|(&letter, &state)| colorize_letter(char::from(letter), Some(state)).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

//! Guess check command
//!
//! Scores a single guess against a target without starting a session.

use crate::core::{Feedback, Word, WordError};

/// Result of checking one guess
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `target`
///
/// Both words must have `letter_limit` letters; dictionary membership is not
/// required.
///
/// # Errors
///
/// Returns `WordError` if either word is malformed.
pub fn check_guess(
    guess: &str,
    target: &str,
    letter_limit: usize,
) -> Result<CheckResult, WordError> {
    let guess = Word::with_limit(guess, letter_limit)?;
    let target = Word::with_limit(target, letter_limit)?;
    let feedback = Feedback::calculate(&guess, &target);

    Ok(CheckResult {
        guess,
        target,
        feedback,
    })
}

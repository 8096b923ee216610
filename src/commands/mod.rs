//! Command implementations

pub mod check;
pub mod simple;
pub mod today;

pub use check::{CheckResult, check_guess};
pub use simple::{SimpleOptions, run_simple};
pub use today::{DailyWord, word_for_date};

use crate::game::TargetRequest;
use crate::share::{ShareError, decode_custom_link};

/// Build the starting request from command-line mode flags
///
/// `word` wins over `link`, which wins over `random`; with no flag the word
/// of the day is played.
///
/// # Errors
///
/// Returns `ShareError` if `link` cannot be decoded.
pub fn request_from_flags(
    random: bool,
    word: Option<&str>,
    link: Option<&str>,
) -> Result<TargetRequest, ShareError> {
    if let Some(word) = word {
        return Ok(TargetRequest::Custom(word.to_string()));
    }
    if let Some(link) = link {
        return Ok(TargetRequest::Custom(decode_custom_link(link)?));
    }
    if random {
        return Ok(TargetRequest::Random);
    }
    Ok(TargetRequest::today())
}

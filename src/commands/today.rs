//! Word-of-the-day lookup

use crate::core::Word;
use crate::game::WordSelector;
use crate::wordlists::Dictionary;
use chrono::NaiveDate;

/// The word scheduled for one date
pub struct DailyWord {
    pub date: NaiveDate,
    pub day_index: i64,
    pub word: Word,
}

/// Look up the word of the day for `date`
#[must_use]
pub fn word_for_date(
    selector: &WordSelector,
    dictionary: &Dictionary,
    date: NaiveDate,
) -> DailyWord {
    DailyWord {
        date,
        day_index: selector.day_index(date),
        word: selector.word_of_day(dictionary, date).clone(),
    }
}

//! Dictionary of valid words
//!
//! An ordered, duplicate-free word list with a membership test. The order is
//! significant: word-of-the-day indexing walks it front to back.

use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when building a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Word list contains no {letter_limit}-letter words")]
    Empty { letter_limit: usize },

    #[error("Failed to read word list '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Immutable ordered word list
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<String>,
    letter_limit: usize,
}

impl Dictionary {
    /// Build a dictionary from words of `letter_limit` letters
    ///
    /// Words of any other length are dropped and later duplicates are ignored,
    /// so the first occurrence keeps its position.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no word of the right length remains.
    pub fn new(
        words: impl IntoIterator<Item = Word>,
        letter_limit: usize,
    ) -> Result<Self, DictionaryError> {
        let mut lookup = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| w.len() == letter_limit)
            .filter(|w| lookup.insert(w.text().to_string()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty { letter_limit });
        }

        Ok(Self {
            words,
            lookup,
            letter_limit,
        })
    }

    /// Build a dictionary from string slices, skipping invalid entries
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no valid word remains.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["crane", "slate", "crane"], 5).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("slate"));
    /// ```
    pub fn from_strs(words: &[&str], letter_limit: usize) -> Result<Self, DictionaryError> {
        Self::new(words_from_slice(words, letter_limit), letter_limit)
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if `letter_limit` matches no embedded word.
    pub fn embedded(letter_limit: usize) -> Result<Self, DictionaryError> {
        Self::from_strs(super::WORDS, letter_limit)
    }

    /// Load a dictionary from a file with one word per line
    ///
    /// # Errors
    /// Returns `DictionaryError::Read` if the file cannot be read, or
    /// `DictionaryError::Empty` if it holds no usable words.
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        letter_limit: usize,
    ) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = load_from_file(path, letter_limit).map_err(|source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(words, letter_limit)
    }

    /// Check whether `text` is a dictionary word
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.lookup.contains(text)
    }

    /// Word at `index`, if in range
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a constructed dictionary
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length every word in this dictionary has
    #[must_use]
    pub const fn letter_limit(&self) -> usize {
        self.letter_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn keeps_first_occurrence_order() {
        let dictionary = Dictionary::from_strs(&["slate", "crane", "slate", "audio"], 5).unwrap();
        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "crane", "audio"]);
    }

    #[test]
    fn membership() {
        let dictionary = Dictionary::from_strs(&["crane", "slate"], 5).unwrap();
        assert!(dictionary.contains("crane"));
        assert!(!dictionary.contains("zzzzz"));
        assert!(!dictionary.contains("CRANE"));
    }

    #[test]
    fn drops_other_lengths() {
        let dictionary = Dictionary::new(
            vec![
                Word::with_limit("cat", 3).unwrap(),
                Word::new("crane").unwrap(),
            ],
            5,
        )
        .unwrap();
        assert_eq!(dictionary.len(), 1);
        assert!(!dictionary.contains("cat"));
    }

    #[test]
    fn empty_is_an_error() {
        assert!(matches!(
            Dictionary::from_strs(&["cat"], 5),
            Err(DictionaryError::Empty { letter_limit: 5 })
        ));
        assert!(matches!(
            Dictionary::embedded(9),
            Err(DictionaryError::Empty { letter_limit: 9 })
        ));
    }

    #[test]
    fn embedded_dictionary_loads() {
        let dictionary = Dictionary::embedded(5).unwrap();
        assert_eq!(dictionary.len(), crate::wordlists::WORDS_COUNT);
        assert_eq!(dictionary.letter_limit(), 5);
        assert!(dictionary.contains("hello"));
    }

    #[test]
    fn from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate").unwrap();

        let dictionary = Dictionary::from_file(file.path(), 5).unwrap();
        assert_eq!(dictionary.get(1).map(Word::text), Some("slate"));
        assert_eq!(dictionary.get(2), None);
    }

    #[test]
    fn from_missing_file_reports_path() {
        let err = Dictionary::from_file("/definitely/not/here.txt", 5).unwrap_err();
        assert!(matches!(err, DictionaryError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}

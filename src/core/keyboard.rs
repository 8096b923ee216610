//! Keyboard hint aggregation
//!
//! Tracks the best-known state of every letter across a session.

use super::{Feedback, LetterMatch, Word};

/// Letters in keyboard order
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Per-letter aggregate of all feedback seen so far
///
/// A letter with no observation is `None`. Observations only ever upgrade a
/// letter along `Absent < Present < Correct`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: [Option<LetterMatch>; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated guess into the aggregate
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &observed) in guess.chars().iter().zip(feedback.matches()) {
            self.observe(letter, observed);
        }
    }

    /// Upgrade a single letter; lower observations are ignored
    pub fn observe(&mut self, letter: u8, observed: LetterMatch) {
        let Some(slot) = Self::index(letter).map(|i| &mut self.letters[i]) else {
            return;
        };
        if slot.is_none_or(|current| observed > current) {
            *slot = Some(observed);
        }
    }

    /// Best-known state of a letter, `None` if never guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterMatch> {
        Self::index(letter.to_ascii_lowercase()).and_then(|i| self.letters[i])
    }

    /// Iterate letters with their state in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (char, Option<LetterMatch>)> + '_ {
        ALPHABET
            .iter()
            .zip(&self.letters)
            .map(|(&letter, &state)| (char::from(letter), state))
    }

    /// Forget every observation
    pub fn clear(&mut self) {
        self.letters = [None; 26];
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| usize::from(letter - b'a'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterMatch::{Absent, Correct, Present};

    fn record(keyboard: &mut KeyboardState, guess: &str, target: &str) {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        let feedback = Feedback::calculate(&guess, &target);
        keyboard.record(&guess, &feedback);
    }

    #[test]
    fn starts_unknown() {
        let keyboard = KeyboardState::new();
        assert!(keyboard.iter().all(|(_, state)| state.is_none()));
        assert_eq!(keyboard.iter().count(), 26);
    }

    #[test]
    fn upgrades_present_to_correct_and_never_regresses() {
        let mut keyboard = KeyboardState::new();

        // A is misplaced in the first guess
        record(&mut keyboard, "audio", "crane");
        assert_eq!(keyboard.get(b'a'), Some(Present));
        assert_eq!(keyboard.get(b'u'), Some(Absent));

        // Exact in the second
        record(&mut keyboard, "slate", "crane");
        assert_eq!(keyboard.get(b'a'), Some(Correct));
        assert_eq!(keyboard.get(b'e'), Some(Correct));

        // A third guess with A in a wrong slot does not downgrade it
        record(&mut keyboard, "abbey", "crane");
        assert_eq!(keyboard.get(b'a'), Some(Correct));
    }

    #[test]
    fn correct_survives_a_later_absent_mark() {
        let mut keyboard = KeyboardState::new();

        record(&mut keyboard, "slate", "crane");
        assert_eq!(keyboard.get(b'a'), Some(Correct));

        // NAVAL vs CRANE: the first A takes the only A, the second is Absent
        let guess = Word::new("naval").unwrap();
        let feedback = Feedback::calculate(&guess, &Word::new("crane").unwrap());
        assert_eq!(feedback.matches()[1], Present);
        assert_eq!(feedback.matches()[3], Absent);

        keyboard.record(&guess, &feedback);
        assert_eq!(keyboard.get(b'a'), Some(Correct));
        assert_eq!(keyboard.get(b'v'), Some(Absent));
    }

    #[test]
    fn absent_never_downgrades_correct() {
        let mut keyboard = KeyboardState::new();
        keyboard.observe(b'e', Correct);
        keyboard.observe(b'e', Absent);
        assert_eq!(keyboard.get(b'e'), Some(Correct));
    }

    #[test]
    fn absent_never_downgrades_present() {
        let mut keyboard = KeyboardState::new();
        keyboard.observe(b'e', Present);
        keyboard.observe(b'e', Absent);
        assert_eq!(keyboard.get(b'e'), Some(Present));
    }

    #[test]
    fn correct_wins_within_a_single_guess() {
        // HELLO vs WORLD: one L is Correct, the other Absent
        let mut keyboard = KeyboardState::new();
        record(&mut keyboard, "hello", "world");
        assert_eq!(keyboard.get(b'l'), Some(Correct));
        assert_eq!(keyboard.get(b'o'), Some(Present));
        assert_eq!(keyboard.get(b'h'), Some(Absent));
    }

    #[test]
    fn ignores_letters_outside_alphabet() {
        let mut keyboard = KeyboardState::new();
        keyboard.observe(b'!', Correct);
        assert_eq!(keyboard, KeyboardState::new());
    }

    #[test]
    fn get_is_case_insensitive() {
        let mut keyboard = KeyboardState::new();
        keyboard.observe(b'q', Present);
        assert_eq!(keyboard.get(b'Q'), Some(Present));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut keyboard = KeyboardState::new();
        record(&mut keyboard, "crane", "crane");
        keyboard.clear();
        assert_eq!(keyboard, KeyboardState::new());
    }
}

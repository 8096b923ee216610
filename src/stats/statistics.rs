//! Win/loss statistics per game mode

use crate::game::{GameMode, GameResult, OutcomeListener};
use serde::{Deserialize, Serialize};

/// Wins and losses for one mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tally {
    pub win: u32,
    pub lose: u32,
}

impl Tally {
    #[must_use]
    pub const fn total(self) -> u32 {
        self.win + self.lose
    }

    /// Fraction of games won, 0.0 when nothing has been played
    #[must_use]
    pub fn win_rate(self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            f64::from(self.win) / f64::from(self.total())
        }
    }
}

/// Accumulated results, one tally per game mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    word_of_the_day: Tally,
    random: Tally,
    custom: Tally,
}

impl Statistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn tally(&self, mode: GameMode) -> Tally {
        match mode {
            GameMode::WordOfTheDay => self.word_of_the_day,
            GameMode::Random => self.random,
            GameMode::Custom => self.custom,
        }
    }

    fn tally_mut(&mut self, mode: GameMode) -> &mut Tally {
        match mode {
            GameMode::WordOfTheDay => &mut self.word_of_the_day,
            GameMode::Random => &mut self.random,
            GameMode::Custom => &mut self.custom,
        }
    }

    /// Count one finished game
    pub fn record(&mut self, mode: GameMode, result: GameResult) {
        let tally = self.tally_mut(mode);
        match result {
            GameResult::Win => tally.win += 1,
            GameResult::Lose => tally.lose += 1,
        }
    }

    /// Every mode with its tally, in display order
    pub fn iter(&self) -> impl Iterator<Item = (GameMode, Tally)> + '_ {
        GameMode::ALL.into_iter().map(|mode| (mode, self.tally(mode)))
    }

    /// Tally summed over all modes
    #[must_use]
    pub fn overall(&self) -> Tally {
        self.iter().fold(Tally::default(), |acc, (_, t)| Tally {
            win: acc.win + t.win,
            lose: acc.lose + t.lose,
        })
    }
}

impl OutcomeListener for Statistics {
    fn on_outcome(&mut self, mode: GameMode, result: GameResult) {
        self.record(mode, result);
    }
}

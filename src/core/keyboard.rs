//! Cumulative keyboard knowledge
//!
//! Folds per-guess letter statuses into the best-known status per letter.
//! Knowledge is monotone: an entry is only ever replaced by a strictly
//! higher-ranked status, so the displayed keyboard never shows a letter as
//! worse than previously discovered.

use super::{Status, Word};
use rustc_hash::FxHashMap;

/// Best-known status per letter across all guesses in a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardKnowledge {
    map: FxHashMap<char, Status>,
}

impl KeyboardKnowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best-known status for a letter, if any guess has touched it
    #[must_use]
    pub fn status_of(&self, letter: char) -> Option<Status> {
        self.map.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Fold one scored guess into the knowledge
    ///
    /// Each letter's entry is upgraded when the new status outranks the
    /// recorded one and left untouched otherwise. Upgrades are permanent
    /// within a session.
    pub fn absorb(&mut self, guess: &Word, statuses: &[Status]) {
        for (i, &status) in statuses.iter().enumerate().take(guess.len()) {
            let letter = guess.char_at(i) as char;
            match self.map.get(&letter) {
                Some(&prev) if prev >= status => {}
                _ => {
                    self.map.insert(letter, status);
                }
            }
        }
    }

    /// Iterate over all letters with a recorded status
    pub fn iter(&self) -> impl Iterator<Item = (char, Status)> + '_ {
        self.map.iter().map(|(&ch, &status)| (ch, status))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

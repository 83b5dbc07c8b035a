//! Answer selection for the two game modes
//!
//! Random mode picks uniformly from the answer list on every new game. Daily
//! mode derives the pick from the calendar date alone, so every player sees
//! the same word on the same date: the index is the number of days since
//! 2024-01-01, wrapped into the list with `rem_euclid` (dates before the
//! epoch still land in range).

use chrono::{Local, NaiveDate};

use crate::core::Word;

/// Game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Fresh random word every game
    Random,
    /// One shared word per calendar date
    Daily,
}

impl Mode {
    /// Parse a mode name, defaulting to random
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "daily" => Self::Daily,
            _ => Self::Random,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Daily => "daily",
        }
    }
}

/// Reference date the daily index counts from
fn daily_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("fixed epoch date is valid")
}

/// Deterministic answer-list index for a calendar date
///
/// Pure function of the date components and the list length: same date, same
/// index, on every machine. Returns 0 for an empty list so callers can treat
/// that case uniformly.
#[must_use]
pub fn daily_index(date: NaiveDate, list_len: usize) -> usize {
    if list_len == 0 {
        return 0;
    }
    let len = i64::try_from(list_len).unwrap_or(i64::MAX);
    let days = (date - daily_epoch()).num_days();
    usize::try_from(days.rem_euclid(len)).unwrap_or(0)
}

/// The shared answer for a calendar date
#[must_use]
pub fn daily_answer(answers: &[Word], date: NaiveDate) -> Option<Word> {
    if answers.is_empty() {
        return None;
    }
    answers.get(daily_index(date, answers.len())).cloned()
}

/// A uniformly random answer
#[must_use]
pub fn random_answer(answers: &[Word]) -> Option<Word> {
    use rand::prelude::IndexedRandom;
    answers.choose(&mut rand::rng()).cloned()
}

/// Pick the session answer for a mode, daily mode using today's local date
#[must_use]
pub fn pick_answer(mode: Mode, answers: &[Word]) -> Option<Word> {
    match mode {
        Mode::Random => random_answer(answers),
        Mode::Daily => daily_answer(answers, Local::now().date_naive()),
    }
}

//! Guess validation against dictionary and answer list
//!
//! A guess is acceptable when it appears in the general dictionary or in the
//! answer list; the union means thematic answer words are always accepted
//! even when the dictionary lacks them. The two sets stay independent so
//! either list can be swapped without touching the other.

use rustc_hash::FxHashSet;

use crate::core::Word;
use crate::wordlists;

/// Pure lookup over the two word sets; case-insensitive by construction
#[derive(Debug, Clone)]
pub struct Validator {
    dictionary: FxHashSet<String>,
    answers: FxHashSet<String>,
}

impl Validator {
    /// Build a validator from raw word slices, uppercasing everything once
    #[must_use]
    pub fn new(dictionary: &[&str], answers: &[&str]) -> Self {
        Self {
            dictionary: dictionary.iter().map(|w| w.to_uppercase()).collect(),
            answers: answers.iter().map(|w| w.to_uppercase()).collect(),
        }
    }

    /// Validator over the embedded word lists
    #[must_use]
    pub fn from_embedded() -> Self {
        Self::new(wordlists::DICTIONARY, wordlists::ANSWERS)
    }

    /// Extend the answer set, so custom answer pools stay guessable
    #[must_use]
    pub fn with_extra_answers(mut self, words: &[Word]) -> Self {
        self.answers
            .extend(words.iter().map(|w| w.text().to_string()));
        self
    }

    /// Whether the word may be submitted as a guess
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        let word = word.to_uppercase();
        self.dictionary.contains(&word) || self.answers.contains(&word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dictionary_words() {
        let validator = Validator::new(&["crane", "slate"], &[]);
        assert!(validator.is_valid("CRANE"));
        assert!(validator.is_valid("slate"));
    }

    #[test]
    fn accepts_answer_words_missing_from_dictionary() {
        let validator = Validator::new(&["crane"], &["vedal"]);
        assert!(validator.is_valid("VEDAL"));
    }

    #[test]
    fn rejects_unknown_words() {
        let validator = Validator::new(&["crane"], &["slate"]);
        assert!(!validator.is_valid("ZZZZZ"));
        assert!(!validator.is_valid(""));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let validator = Validator::new(&["CrAnE"], &[]);
        assert!(validator.is_valid("crane"));
        assert!(validator.is_valid("CRANE"));
    }

    #[test]
    fn extra_answers_become_guessable() {
        let validator =
            Validator::new(&["crane"], &[]).with_extra_answers(&[Word::new("zonky").unwrap()]);
        assert!(validator.is_valid("zonky"));
        assert!(validator.is_valid("crane"));
        assert!(!validator.is_valid("qwert"));
    }

    #[test]
    fn embedded_lists_validate_their_own_words() {
        let validator = Validator::from_embedded();
        assert!(validator.is_valid(wordlists::ANSWERS[0]));
        assert!(validator.is_valid(wordlists::DICTIONARY[0]));
    }
}

//! Letter status and guess evaluation
//!
//! A `Status` is the per-letter outcome of scoring a guess against the answer.
//! The derived order `Absent < Present < Correct` is the ranking used by the
//! keyboard aggregation: a letter's displayed knowledge may only ever move up.

use super::Word;

/// Per-letter evaluation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    /// Letter does not appear in the answer (or all its copies are used up)
    Absent,
    /// Letter appears in the answer at a different position
    Present,
    /// Letter is in the correct position
    Correct,
}

impl Status {
    /// Stable lowercase name, matching the original web game's CSS classes
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        }
    }

    /// Emoji used in the share grid
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Absent => "⬛",
            Self::Present => "🟧",
            Self::Correct => "🟩",
        }
    }
}

/// Score `guess` against `answer`, producing one `Status` per letter
///
/// Two-pass algorithm, required for correct duplicate-letter handling:
///
/// 1. Exact matches are marked `Correct` and consume that letter from the
///    answer's letter multiset.
/// 2. Remaining positions are marked `Present` only while the multiset still
///    has copies of the guessed letter available, otherwise `Absent`.
///
/// A letter is therefore never marked present more times than it actually
/// remains available after the exact matches are removed, and exact matches
/// take priority regardless of scan order. Pure function, no side effects.
///
/// Both words must have the same length; this is guaranteed by the session
/// machine, which only submits rows of the answer's width.
///
/// # Examples
/// ```
/// use wordgrid::core::{Status, Word, evaluate};
///
/// let guess = Word::new("crate").unwrap();
/// let answer = Word::new("crane").unwrap();
/// let statuses = evaluate(&guess, &answer);
///
/// assert_eq!(
///     statuses,
///     [
///         Status::Correct,
///         Status::Correct,
///         Status::Correct,
///         Status::Absent,
///         Status::Correct,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, answer: &Word) -> Vec<Status> {
    debug_assert_eq!(guess.len(), answer.len());
    let len = guess.len().min(answer.len());

    let mut result = vec![Status::Absent; len];
    let mut available = answer.char_counts();

    // First pass: exact position matches consume from the pool
    for i in 0..len {
        if guess.char_at(i) == answer.char_at(i) {
            result[i] = Status::Correct;
            if let Some(count) = available.get_mut(&guess.char_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: displaced letters, while the pool still has them
    for i in 0..len {
        if result[i] != Status::Correct
            && let Some(count) = available.get_mut(&guess.char_at(i))
            && *count > 0
        {
            result[i] = Status::Present;
            *count -= 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(guess: &str, answer: &str) -> Vec<Status> {
        evaluate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn status_rank_order() {
        assert!(Status::Absent < Status::Present);
        assert!(Status::Present < Status::Correct);
    }

    #[test]
    fn status_names() {
        assert_eq!(Status::Correct.name(), "correct");
        assert_eq!(Status::Present.name(), "present");
        assert_eq!(Status::Absent.name(), "absent");
    }

    #[test]
    fn evaluate_all_correct() {
        use Status::Correct;
        assert_eq!(eval("CRANE", "CRANE"), vec![Correct; 5]);
    }

    #[test]
    fn evaluate_all_absent() {
        assert_eq!(eval("abcde", "fghij"), vec![Status::Absent; 5]);
    }

    #[test]
    fn evaluate_duplicate_letters_limited_by_pool() {
        // Answer LLAMA has L=2, A=2, M=1. Guess ALLOY:
        // pos 1 L is the only exact match; afterwards L=1, A=2, M=1 remain.
        // pos 0 A -> present, pos 2 L -> present (pool now empty of L),
        // pos 3 O and pos 4 Y -> absent.
        use Status::{Absent, Correct, Present};
        assert_eq!(
            eval("ALLOY", "LLAMA"),
            vec![Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn evaluate_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: the second O is an exact match and must win even
        // though the first O is scanned earlier.
        use Status::{Absent, Correct, Present};
        assert_eq!(
            eval("robot", "floor"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn evaluate_duplicates_not_overcounted() {
        // SPEED vs ERASE: both E's are present (ERASE has two E's), the
        // answer has no third E for anything else.
        use Status::{Absent, Present};
        assert_eq!(
            eval("speed", "erase"),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn evaluate_guess_repeats_single_answer_letter() {
        // Answer has one E; guess EERIE. Exact match at pos 4 consumes it
        // first, so neither leading E can be present.
        use Status::{Absent, Correct, Present};
        let statuses = eval("eerie", "crane");
        assert_eq!(statuses[4], Correct);
        assert_eq!(statuses[0], Absent);
        assert_eq!(statuses[1], Absent);
        assert_eq!(statuses[2], Present); // R
        assert_eq!(statuses[3], Absent); // I
    }

    #[test]
    fn evaluate_symmetry() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert!(evaluate(&w, &w).iter().all(|s| *s == Status::Correct));
        }
    }

    #[test]
    fn evaluate_non_five_lengths() {
        use Status::{Absent, Correct, Present};
        assert_eq!(eval("ox", "ox"), vec![Correct, Correct]);
        assert_eq!(
            eval("station", "starlet"),
            vec![Correct, Correct, Correct, Present, Absent, Absent, Absent]
        );
    }
}

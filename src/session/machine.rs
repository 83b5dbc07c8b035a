//! The session state machine
//!
//! Owns the grid and cursor for one game and processes key events. A commit
//! is two-phase: `submit` scores the row, writes the status grid, and returns
//! a [`RevealPlan`] describing the staggered flips as plain delays; the
//! driver schedules those against its own clock and calls `resolve_commit`
//! once the last flip has visually completed. While a commit is in flight the
//! `animating` flag makes every input a no-op, which is the only mutual
//! exclusion the single-threaded event loop needs.

use std::time::Duration;

use crate::config::Timing;
use crate::core::{Status, Word, evaluate};
use crate::render::{FinishSink, FinishSnapshot, Renderer};
use crate::validate::Validator;

use super::state::SessionState;

/// A game input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Backspace,
    Enter,
}

/// Expected, user-correctable reasons a submit is refused
///
/// These are advisory conditions, not errors: state is left untouched and a
/// transient message is flashed through the render collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The current row is not fully filled
    IncompleteGuess,
    /// The validator refused the word
    InvalidWord,
}

/// What a key event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Silently ignored (done, animating, cursor at a boundary, or not a letter)
    Ignored,
    /// A cell was filled or cleared
    Edited,
    /// Submit refused; state unchanged
    Rejected(Rejection),
    /// Row committed; the driver owns the returned reveal schedule
    Committed(RevealPlan),
}

/// One tile flip within a reveal, `at` measured from commit start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flip {
    pub col: usize,
    pub at: Duration,
}

/// Pure description of a committed row's reveal
///
/// Column `c` flips at `c * stagger`; `resolve_after` falls strictly after
/// the last flip has finished, and is when the driver must call
/// [`Session::resolve_commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealPlan {
    pub row: usize,
    pub statuses: Vec<Status>,
    pub flips: Vec<Flip>,
    pub resolve_after: Duration,
}

/// Outcome of the post-reveal resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// `resolve_commit` was called without a commit in flight
    NotCommitting,
    /// The game continues on the next row
    Advanced { next_row: usize },
    /// The game is over; the finish collaborator has received the snapshot
    Finished { win: bool },
}

/// One game session: answer, optional validator, reveal timing, and state
pub struct Session {
    answer: Word,
    validator: Option<Validator>,
    timing: Timing,
    state: SessionState,
}

impl Session {
    #[must_use]
    pub fn new(answer: Word, max_rows: usize, validator: Option<Validator>, timing: Timing) -> Self {
        let word_len = answer.len();
        Self {
            answer,
            validator,
            timing,
            state: SessionState::new(max_rows, word_len),
        }
    }

    #[must_use]
    pub fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub fn word_len(&self) -> usize {
        self.answer.len()
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Process one key event
    ///
    /// Everything is a no-op once the game is done or while a reveal is in
    /// flight; re-entrancy during the animation window is impossible by
    /// construction.
    pub fn handle_key(&mut self, key: Key, renderer: &mut dyn Renderer) -> KeyOutcome {
        if self.state.done || self.state.animating {
            return KeyOutcome::Ignored;
        }

        match key {
            Key::Letter(ch) => self.input_letter(ch, renderer),
            Key::Backspace => self.backspace(renderer),
            Key::Enter => self.submit(renderer),
        }
    }

    fn input_letter(&mut self, ch: char, renderer: &mut dyn Renderer) -> KeyOutcome {
        let ch = ch.to_ascii_uppercase();
        if !ch.is_ascii_uppercase() {
            return KeyOutcome::Ignored;
        }
        if self.state.col >= self.word_len() {
            return KeyOutcome::Ignored;
        }

        let (row, col) = (self.state.row, self.state.col);
        self.state.rows[row][col] = Some(ch);
        renderer.set_cell(row, col, Some(ch));
        self.state.col += 1;
        KeyOutcome::Edited
    }

    fn backspace(&mut self, renderer: &mut dyn Renderer) -> KeyOutcome {
        if self.state.col == 0 {
            return KeyOutcome::Ignored;
        }

        self.state.col -= 1;
        let (row, col) = (self.state.row, self.state.col);
        self.state.rows[row][col] = None;
        renderer.set_cell(row, col, None);
        KeyOutcome::Edited
    }

    fn submit(&mut self, renderer: &mut dyn Renderer) -> KeyOutcome {
        let len = self.word_len();

        if self.state.col < len {
            renderer.flash_message(&format!(
                "You need to fill all {len} letters to make a guess!"
            ));
            return KeyOutcome::Rejected(Rejection::IncompleteGuess);
        }

        let guess_text = self.state.row_text(self.state.row);

        if let Some(validator) = &self.validator
            && !validator.is_valid(&guess_text)
        {
            renderer.flash_message("That is not a word this game recognizes.");
            return KeyOutcome::Rejected(Rejection::InvalidWord);
        }

        let Ok(guess) = Word::new(&guess_text) else {
            // The grid only ever holds uppercase letters; reaching this means
            // the filling invariant was broken somewhere.
            tracing::error!(guess = %guess_text, "committed row does not form a word");
            return KeyOutcome::Ignored;
        };

        let row = self.state.row;
        if self.state.status.get(row).is_none_or(|r| r.len() != len) {
            tracing::error!(row, "status row out of range, aborting commit");
            return KeyOutcome::Ignored;
        }

        self.state.animating = true;

        let statuses = evaluate(&guess, &self.answer);
        for (col, &status) in statuses.iter().enumerate() {
            self.state.status[row][col] = Some(status);
            renderer.set_cell_status(row, col, status);
        }

        let flips = (0..len)
            .map(|col| Flip {
                col,
                at: self.timing.stagger * col as u32,
            })
            .collect();
        let resolve_after =
            self.timing.stagger * (len - 1) as u32 + self.timing.flip + self.timing.epsilon;

        KeyOutcome::Committed(RevealPlan {
            row,
            statuses,
            flips,
            resolve_after,
        })
    }

    /// Second phase of a commit, due once the reveal has visually completed
    ///
    /// Folds the row into the keyboard knowledge, computes win/done, clears
    /// the animation lock, and either advances to the next row or hands the
    /// finish collaborator its snapshot.
    pub fn resolve_commit(
        &mut self,
        renderer: &mut dyn Renderer,
        finish: &mut dyn FinishSink,
    ) -> Resolution {
        if !self.state.animating {
            tracing::debug!("resolve_commit called with no commit in flight");
            return Resolution::NotCommitting;
        }

        let row = self.state.row;
        let guess_text = self.state.row_text(row);
        let statuses = self.state.row_statuses(row);

        match Word::new(&guess_text) {
            Ok(guess) => self.state.keyboard.absorb(&guess, &statuses),
            Err(err) => tracing::error!(%err, "committed row unreadable during resolve"),
        }
        for (letter, status) in self.state.keyboard.iter() {
            renderer.update_key_style(letter, status);
        }

        let win =
            statuses.len() == self.word_len() && statuses.iter().all(|s| *s == Status::Correct);
        self.state.win = win;
        self.state.done = win || row + 1 == self.state.max_rows();
        self.state.animating = false;

        if self.state.done {
            finish.reveal(self.snapshot());
            Resolution::Finished { win }
        } else {
            self.state.row += 1;
            self.state.col = 0;
            Resolution::Advanced {
                next_row: self.state.row,
            }
        }
    }

    /// Snapshot of every committed row plus the outcome flags
    #[must_use]
    pub fn snapshot(&self) -> FinishSnapshot {
        let committed = (0..=self.state.row)
            .filter(|&r| !self.state.row_statuses(r).is_empty())
            .collect::<Vec<_>>();

        FinishSnapshot {
            guesses: committed.iter().map(|&r| self.state.row_text(r)).collect(),
            statuses: committed
                .iter()
                .map(|&r| self.state.row_statuses(r))
                .collect(),
            final_row: self.state.row,
            win: self.state.win,
            answer: self.answer.text().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_ROWS;

    /// Records every collaborator call for assertions
    #[derive(Default)]
    struct Recording {
        cells: Vec<(usize, usize, Option<char>)>,
        cell_statuses: Vec<(usize, usize, Status)>,
        messages: Vec<String>,
        key_styles: Vec<(char, Status)>,
        snapshots: Vec<FinishSnapshot>,
    }

    impl Renderer for Recording {
        fn set_cell(&mut self, row: usize, col: usize, ch: Option<char>) {
            self.cells.push((row, col, ch));
        }
        fn set_cell_status(&mut self, row: usize, col: usize, status: Status) {
            self.cell_statuses.push((row, col, status));
        }
        fn flash_message(&mut self, text: &str) {
            self.messages.push(text.to_string());
        }
        fn update_key_style(&mut self, letter: char, status: Status) {
            self.key_styles.push((letter, status));
        }
    }

    impl FinishSink for Recording {
        fn reveal(&mut self, snapshot: FinishSnapshot) {
            self.snapshots.push(snapshot);
        }
    }

    fn session(answer: &str) -> Session {
        Session::new(
            Word::new(answer).unwrap(),
            MAX_ROWS,
            None,
            Timing::instant(),
        )
    }

    fn type_word(session: &mut Session, r: &mut Recording, word: &str) {
        for ch in word.chars() {
            session.handle_key(Key::Letter(ch), r);
        }
    }

    // Recording implements both collaborator traits, but resolve needs two
    // distinct &mut borrows, so the finish sink is a separate recorder whose
    // captures are merged back.
    fn commit_and_resolve(session: &mut Session, r: &mut Recording, word: &str) -> Resolution {
        type_word(session, r, word);
        let outcome = session.handle_key(Key::Enter, r);
        assert!(
            matches!(outcome, KeyOutcome::Committed(_)),
            "expected commit, got {outcome:?}"
        );
        let mut sink = Recording::default();
        let resolution = session.resolve_commit(r, &mut sink);
        r.snapshots.extend(sink.snapshots);
        r.key_styles.extend(sink.key_styles);
        resolution
    }

    #[test]
    fn letters_fill_left_to_right() {
        let mut s = session("CRANE");
        let mut r = Recording::default();

        s.handle_key(Key::Letter('c'), &mut r);
        s.handle_key(Key::Letter('R'), &mut r);
        assert_eq!(s.state().col(), 2);
        assert_eq!(s.state().cell(0, 0), Some('C'));
        assert_eq!(s.state().cell(0, 1), Some('R'));
        assert_eq!(r.cells, vec![(0, 0, Some('C')), (0, 1, Some('R'))]);
    }

    #[test]
    fn extra_letters_beyond_width_are_ignored() {
        let mut s = session("CRANE");
        let mut r = Recording::default();

        type_word(&mut s, &mut r, "CRANES");
        assert_eq!(s.state().col(), 5);
        assert_eq!(
            s.handle_key(Key::Letter('X'), &mut r),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut s = session("CRANE");
        let mut r = Recording::default();
        assert_eq!(s.handle_key(Key::Letter('3'), &mut r), KeyOutcome::Ignored);
        assert_eq!(s.handle_key(Key::Letter(' '), &mut r), KeyOutcome::Ignored);
        assert_eq!(s.state().col(), 0);
    }

    #[test]
    fn backspace_clears_last_cell() {
        let mut s = session("CRANE");
        let mut r = Recording::default();

        type_word(&mut s, &mut r, "CR");
        s.handle_key(Key::Backspace, &mut r);
        assert_eq!(s.state().col(), 1);
        assert_eq!(s.state().cell(0, 1), None);
        assert_eq!(r.cells.last(), Some(&(0, 1, None)));
    }

    #[test]
    fn backspace_at_column_zero_is_ignored() {
        let mut s = session("CRANE");
        let mut r = Recording::default();
        assert_eq!(s.handle_key(Key::Backspace, &mut r), KeyOutcome::Ignored);
    }

    #[test]
    fn incomplete_submit_rejected_and_state_unchanged() {
        let mut s = session("CRANE");
        let mut r = Recording::default();

        type_word(&mut s, &mut r, "CRA");
        let before = s.state().clone();
        let outcome = s.handle_key(Key::Enter, &mut r);

        assert_eq!(outcome, KeyOutcome::Rejected(Rejection::IncompleteGuess));
        assert_eq!(*s.state(), before);
        assert_eq!(r.messages.len(), 1);
        assert!(r.messages[0].contains("all 5 letters"));
    }

    #[test]
    fn invalid_word_rejected_and_state_unchanged() {
        let validator = Validator::new(&["crane"], &["slate"]);
        let mut s = Session::new(
            Word::new("CRANE").unwrap(),
            MAX_ROWS,
            Some(validator),
            Timing::instant(),
        );
        let mut r = Recording::default();

        type_word(&mut s, &mut r, "ZZZZZ");
        let before = s.state().clone();
        let outcome = s.handle_key(Key::Enter, &mut r);

        assert_eq!(outcome, KeyOutcome::Rejected(Rejection::InvalidWord));
        assert_eq!(*s.state(), before);
        assert_eq!(r.messages.len(), 1);
    }

    #[test]
    fn commit_writes_statuses_and_locks_input() {
        let mut s = session("CRANE");
        let mut r = Recording::default();

        type_word(&mut s, &mut r, "CRATE");
        let outcome = s.handle_key(Key::Enter, &mut r);

        let KeyOutcome::Committed(plan) = outcome else {
            panic!("expected commit");
        };
        use Status::{Absent, Correct};
        assert_eq!(plan.row, 0);
        assert_eq!(plan.statuses, vec![Correct, Correct, Correct, Absent, Correct]);
        assert_eq!(s.state().cell_status(0, 3), Some(Absent));
        assert!(s.state().is_animating());
        assert_eq!(r.cell_statuses.len(), 5);
    }

    #[test]
    fn input_is_noop_while_animating() {
        let mut s = session("CRANE");
        let mut r = Recording::default();

        type_word(&mut s, &mut r, "CRATE");
        s.handle_key(Key::Enter, &mut r);
        assert!(s.state().is_animating());

        let before = s.state().clone();
        assert_eq!(s.handle_key(Key::Letter('A'), &mut r), KeyOutcome::Ignored);
        assert_eq!(s.handle_key(Key::Backspace, &mut r), KeyOutcome::Ignored);
        assert_eq!(s.handle_key(Key::Enter, &mut r), KeyOutcome::Ignored);
        assert_eq!(*s.state(), before);
    }

    #[test]
    fn reveal_plan_staggers_flips() {
        let mut s = Session::new(
            Word::new("CRANE").unwrap(),
            MAX_ROWS,
            None,
            Timing::default(),
        );
        let mut r = Recording::default();

        type_word(&mut s, &mut r, "CRANE");
        let KeyOutcome::Committed(plan) = s.handle_key(Key::Enter, &mut r) else {
            panic!("expected commit");
        };

        let stagger = crate::config::STAGGER;
        assert_eq!(plan.flips.len(), 5);
        for (c, flip) in plan.flips.iter().enumerate() {
            assert_eq!(flip.col, c);
            assert_eq!(flip.at, stagger * c as u32);
        }
        // Resolution fires strictly after the last flip's completion.
        let last_flip_end = plan.flips[4].at + crate::config::FLIP;
        assert!(plan.resolve_after > last_flip_end);
    }

    #[test]
    fn resolve_without_commit_is_noop() {
        use crate::render::NullRenderer;
        let mut s = session("CRANE");
        let mut r = NullRenderer;
        let mut sink = NullRenderer;
        assert_eq!(
            s.resolve_commit(&mut r, &mut sink),
            Resolution::NotCommitting
        );
    }

    #[test]
    fn row_advances_after_non_winning_resolve() {
        let mut s = session("CRANE");
        let mut r = Recording::default();

        let resolution = commit_and_resolve(&mut s, &mut r, "CRATE");
        assert_eq!(resolution, Resolution::Advanced { next_row: 1 });
        assert_eq!(s.state().row(), 1);
        assert_eq!(s.state().col(), 0);
        assert!(!s.state().is_animating());
        assert!(!s.state().is_done());
        // Keyboard styles were pushed for every known letter.
        assert!(!r.key_styles.is_empty());
    }

    #[test]
    fn end_to_end_win_on_second_row() {
        let mut s = session("CRANE");
        let mut r = Recording::default();

        assert_eq!(
            commit_and_resolve(&mut s, &mut r, "CRATE"),
            Resolution::Advanced { next_row: 1 }
        );
        assert_eq!(
            commit_and_resolve(&mut s, &mut r, "CRANE"),
            Resolution::Finished { win: true }
        );

        assert!(s.state().is_done());
        assert!(s.state().is_win());
        assert_eq!(r.snapshots.len(), 1);

        let snapshot = &r.snapshots[0];
        assert_eq!(snapshot.guesses, vec!["CRATE", "CRANE"]);
        assert_eq!(snapshot.final_row, 1);
        assert!(snapshot.win);
        assert_eq!(snapshot.answer, "CRANE");
        assert_eq!(snapshot.statuses.len(), 2);
        assert!(snapshot.statuses[1].iter().all(|s| *s == Status::Correct));
    }

    #[test]
    fn exhausting_all_rows_loses() {
        let mut s = session("CRANE");
        let mut r = Recording::default();

        for row in 0..MAX_ROWS - 1 {
            assert_eq!(
                commit_and_resolve(&mut s, &mut r, "SLATE"),
                Resolution::Advanced { next_row: row + 1 }
            );
        }
        assert_eq!(
            commit_and_resolve(&mut s, &mut r, "SLATE"),
            Resolution::Finished { win: false }
        );

        assert!(s.state().is_done());
        assert!(!s.state().is_win());
        assert_eq!(s.state().row(), MAX_ROWS - 1);

        let snapshot = &r.snapshots[0];
        assert_eq!(snapshot.guesses.len(), MAX_ROWS);
        assert!(!snapshot.win);
    }

    #[test]
    fn input_after_done_is_ignored() {
        let mut s = session("CRANE");
        let mut r = Recording::default();

        commit_and_resolve(&mut s, &mut r, "CRANE");
        let before = s.state().clone();
        assert_eq!(s.handle_key(Key::Letter('A'), &mut r), KeyOutcome::Ignored);
        assert_eq!(s.handle_key(Key::Enter, &mut r), KeyOutcome::Ignored);
        assert_eq!(*s.state(), before);
    }

    #[test]
    fn answer_words_always_pass_validation() {
        // Thematic answer words are accepted even when the dictionary does
        // not contain them.
        let validator = Validator::new(&["crane"], &["zonky"]);
        let mut s = Session::new(
            Word::new("CRANE").unwrap(),
            MAX_ROWS,
            Some(validator),
            Timing::instant(),
        );
        let mut r = Recording::default();

        type_word(&mut s, &mut r, "ZONKY");
        assert!(matches!(
            s.handle_key(Key::Enter, &mut r),
            KeyOutcome::Committed(_)
        ));
    }

    #[test]
    fn committed_statuses_never_mutate_afterwards() {
        let mut s = session("CRANE");
        let mut r = Recording::default();

        commit_and_resolve(&mut s, &mut r, "CRATE");
        let first_row: Vec<_> = (0..5).map(|c| s.state().cell_status(0, c)).collect();

        commit_and_resolve(&mut s, &mut r, "SLATE");
        let first_row_after: Vec<_> = (0..5).map(|c| s.state().cell_status(0, c)).collect();
        assert_eq!(first_row, first_row_after);
    }
}

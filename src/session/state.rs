//! Session state container
//!
//! One `SessionState` value per game. It is mutated exclusively by the
//! session machine in response to input events and discarded when the player
//! starts a new game; nothing in it persists across sessions.

use crate::core::{KeyboardKnowledge, Status};

/// The full observable state of one play-through
///
/// Invariants, maintained by the session machine:
/// - `row < max_rows` and `col <= word_len`;
/// - `col` counts contiguous filled cells from the left of the current row;
/// - a status cell is written once, at commit time, and never mutated after;
/// - once `done` is set, the grids and cursor no longer change;
/// - while `animating`, every input is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub(crate) rows: Vec<Vec<Option<char>>>,
    pub(crate) status: Vec<Vec<Option<Status>>>,
    pub(crate) row: usize,
    pub(crate) col: usize,
    pub(crate) keyboard: KeyboardKnowledge,
    pub(crate) done: bool,
    pub(crate) win: bool,
    pub(crate) animating: bool,
}

impl SessionState {
    pub(crate) fn new(max_rows: usize, word_len: usize) -> Self {
        Self {
            rows: vec![vec![None; word_len]; max_rows],
            status: vec![vec![None; word_len]; max_rows],
            row: 0,
            col: 0,
            keyboard: KeyboardKnowledge::new(),
            done: false,
            win: false,
            animating: false,
        }
    }

    #[must_use]
    pub fn max_rows(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn word_len(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Current row index (the row being filled, or the last committed row
    /// once the game is done)
    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Number of filled cells in the current row
    #[must_use]
    pub fn col(&self) -> usize {
        self.col
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        self.win
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Letter at a grid cell, if filled
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Status of a grid cell, if that cell has been committed
    #[must_use]
    pub fn cell_status(&self, row: usize, col: usize) -> Option<Status> {
        self.status.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardKnowledge {
        &self.keyboard
    }

    /// Join the filled cells of a row into a string
    pub(crate) fn row_text(&self, row: usize) -> String {
        self.rows
            .get(row)
            .map(|r| r.iter().flatten().collect())
            .unwrap_or_default()
    }

    /// Statuses of a committed row, in column order
    pub(crate) fn row_statuses(&self, row: usize) -> Vec<Status> {
        self.status
            .get(row)
            .map(|r| r.iter().flatten().copied().collect())
            .unwrap_or_default()
    }
}

//! Collaborator traits at the UI boundary
//!
//! The session machine drives these narrow interfaces and never calls into
//! the UI any other way. Calls only flow from the core outward; a renderer
//! must not mutate the session from inside a callback.

use crate::core::Status;

/// Everything the finish collaborator needs to reconstruct the outcome:
/// every committed row's letters and statuses, the final row index, the win
/// flag, and the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishSnapshot {
    /// Committed guesses, in play order
    pub guesses: Vec<String>,
    /// Status rows parallel to `guesses`
    pub statuses: Vec<Vec<Status>>,
    /// Index of the last committed row
    pub final_row: usize,
    pub win: bool,
    pub answer: String,
}

/// Rendering collaborator, notified of every visible state change
///
/// All methods are fire-and-forget from the core's point of view and must be
/// idempotent; `update_key_style` in particular may be re-sent for letters
/// whose status has not changed.
pub trait Renderer {
    /// A cell's letter changed (`None` clears the cell)
    fn set_cell(&mut self, row: usize, col: usize, ch: Option<char>);

    /// A committed cell received its evaluation status
    fn set_cell_status(&mut self, row: usize, col: usize, status: Status);

    /// Transient advisory message (incomplete guess, unknown word)
    fn flash_message(&mut self, text: &str);

    /// A virtual-keyboard key's best-known status
    fn update_key_style(&mut self, letter: char, status: Status);
}

/// Finish collaborator; `reveal` is invoked exactly once per session, when
/// the game transitions to done.
pub trait FinishSink {
    fn reveal(&mut self, snapshot: FinishSnapshot);
}

/// No-op collaborator for drivers that redraw everything from session state
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn set_cell(&mut self, _row: usize, _col: usize, _ch: Option<char>) {}
    fn set_cell_status(&mut self, _row: usize, _col: usize, _status: Status) {}
    fn flash_message(&mut self, _text: &str) {}
    fn update_key_style(&mut self, _letter: char, _status: Status) {}
}

impl FinishSink for NullRenderer {
    fn reveal(&mut self, _snapshot: FinishSnapshot) {}
}

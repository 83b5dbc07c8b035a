//! Core domain types for the word-guessing game
//!
//! The fundamental types with no UI dependencies: words, per-letter statuses,
//! the guess evaluator, and the cumulative keyboard knowledge. Everything
//! here is pure and directly testable.

mod keyboard;
mod status;
mod word;

pub use keyboard::KeyboardKnowledge;
pub use status::{Status, evaluate};
pub use word::{Word, WordError};

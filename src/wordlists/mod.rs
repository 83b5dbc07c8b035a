//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary: the answer list a
//! session's target is drawn from and the general dictionary used for guess
//! validation.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, DICTIONARY, DICTIONARY_COUNT};

//! Wordgrid
//!
//! A word-guessing game core: duplicate-aware guess evaluation, keyboard
//! knowledge tracking, and a session state machine with staggered tile
//! reveals, plus TUI and line-based front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordgrid::core::{Status, Word, evaluate};
//!
//! let guess = Word::new("alloy").unwrap();
//! let answer = Word::new("llama").unwrap();
//!
//! let statuses = evaluate(&guess, &answer);
//! assert_eq!(statuses[1], Status::Correct);
//! ```

// Core domain types
pub mod core;

// Answer selection
pub mod answer;

// Reveal timing and board dimensions
pub mod config;

// Rendering seams between the session and its front ends
pub mod render;

// Game session state machine
pub mod session;

// Persisted user preferences
pub mod settings;

// Guess validation
pub mod validate;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

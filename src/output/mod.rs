//! Terminal output formatting and share text

pub mod display;
pub mod share;

pub use share::share_text;

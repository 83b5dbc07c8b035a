//! Line-mode output formatting
//!
//! Colored terminal rendering for the non-TUI play mode.

use colored::Colorize;

use crate::core::{KeyboardKnowledge, Status};

/// A committed row as colored letter tiles
#[must_use]
pub fn colored_row(guess: &str, statuses: &[Status]) -> String {
    let mut out = String::new();
    for (ch, status) in guess.chars().zip(statuses) {
        let tile = format!(" {ch} ");
        let tile = match status {
            Status::Correct => tile.black().on_green(),
            Status::Present => tile.black().on_yellow(),
            Status::Absent => tile.white().on_bright_black(),
        };
        out.push_str(&tile.to_string());
    }
    out
}

/// The alphabet with each letter styled by its best-known status
#[must_use]
pub fn keyboard_line(knowledge: &KeyboardKnowledge) -> String {
    let mut out = String::new();
    for letter in 'A'..='Z' {
        let styled = match knowledge.status_of(letter) {
            Some(Status::Correct) => letter.to_string().green().bold().to_string(),
            Some(Status::Present) => letter.to_string().yellow().bold().to_string(),
            Some(Status::Absent) => letter.to_string().bright_black().to_string(),
            None => letter.to_string(),
        };
        out.push_str(&styled);
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    #[test]
    fn colored_row_contains_every_letter() {
        let guess = Word::new("CRATE").unwrap();
        let answer = Word::new("CRANE").unwrap();
        let statuses = evaluate(&guess, &answer);
        let row = colored_row(guess.text(), &statuses);
        for ch in "CRATE".chars() {
            assert!(row.contains(ch), "missing {ch}");
        }
    }

    #[test]
    fn keyboard_line_contains_alphabet() {
        let line = keyboard_line(&KeyboardKnowledge::new());
        for ch in 'A'..='Z' {
            assert!(line.contains(ch));
        }
    }
}

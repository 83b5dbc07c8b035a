//! Simple line-based play mode
//!
//! Text-based game loop without the TUI. Uses zero-delay reveal timing, so
//! every commit resolves immediately after the row is printed.

use std::io::{self, Write};

use colored::Colorize;

use crate::output::display::{colored_row, keyboard_line};
use crate::output::share_text;
use crate::core::Status;
use crate::render::{FinishSink, FinishSnapshot, Renderer};
use crate::session::{Key, KeyOutcome, Resolution, Session};

/// Prints advisory messages; everything else is drawn from session state
struct LineRenderer;

impl Renderer for LineRenderer {
    fn set_cell(&mut self, _row: usize, _col: usize, _ch: Option<char>) {}
    fn set_cell_status(&mut self, _row: usize, _col: usize, _status: Status) {}
    fn flash_message(&mut self, text: &str) {
        println!("{}", text.yellow());
    }
    fn update_key_style(&mut self, _letter: char, _status: Status) {}
}

#[derive(Default)]
struct CaptureFinish {
    snapshot: Option<FinishSnapshot>,
}

impl FinishSink for CaptureFinish {
    fn reveal(&mut self, snapshot: FinishSnapshot) {
        self.snapshot = Some(snapshot);
    }
}

/// Run the line-based game to completion
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_simple(mut session: Session, show_answer: bool) -> Result<(), String> {
    let max_rows = session.state().max_rows();
    let word_len = session.word_len();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordgrid - Line Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the {word_len}-letter word in {max_rows} tries.");
    println!("Type a word and press Enter; 'quit' to give up.\n");

    let mut renderer = LineRenderer;
    let mut finish = CaptureFinish::default();

    loop {
        let attempt = session.state().row() + 1;
        let input = get_user_input(&format!("Guess {attempt}/{max_rows}"))?;
        let word = input.trim().to_uppercase();

        if matches!(word.as_str(), "QUIT" | "Q" | "EXIT") {
            println!("\nThe word was: {}", session.answer());
            return Ok(());
        }

        // Start the row fresh in case a rejected guess left letters behind.
        while session.state().col() > 0 {
            session.handle_key(Key::Backspace, &mut renderer);
        }
        for ch in word.chars() {
            session.handle_key(Key::Letter(ch), &mut renderer);
        }

        match session.handle_key(Key::Enter, &mut renderer) {
            KeyOutcome::Committed(plan) => {
                let guess: String = (0..word_len)
                    .filter_map(|c| session.state().cell(plan.row, c))
                    .collect();
                println!("  {}", colored_row(&guess, &plan.statuses));

                match session.resolve_commit(&mut renderer, &mut finish) {
                    Resolution::Advanced { .. } => {
                        println!("  {}\n", keyboard_line(session.state().keyboard()));
                    }
                    Resolution::Finished { win } => {
                        if win {
                            println!("\n🎉 You got it!");
                        } else {
                            println!("\nBetter luck next time!");
                        }
                        println!("The word was: {}", session.answer());

                        if let Some(snapshot) = &finish.snapshot {
                            println!("\n{}", share_text(snapshot, max_rows, show_answer));
                        }
                        return Ok(());
                    }
                    Resolution::NotCommitting => {}
                }
            }
            // Rejections already flashed their message; anything else was
            // a stray input.
            KeyOutcome::Rejected(_) | KeyOutcome::Ignored | KeyOutcome::Edited => {}
        }
    }
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {e}"))?;

    Ok(input)
}

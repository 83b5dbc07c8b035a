//! Share-text generation
//!
//! Builds the emoji grid a finished game can be shared as, from the finish
//! snapshot alone.

use crate::render::FinishSnapshot;

/// Render a finished game as shareable text
///
/// Header line, the answer when `show_answer` is set (random mode reveals it,
/// daily mode keeps the word secret for other players), the result as
/// `rows/max` or `Failed`, then one emoji row per committed guess.
#[must_use]
pub fn share_text(snapshot: &FinishSnapshot, max_rows: usize, show_answer: bool) -> String {
    let mut text = String::from("Wordgrid\n");

    if show_answer {
        text.push_str(&format!("The word was \"{}\"\n", snapshot.answer));
    }

    if snapshot.win {
        text.push_str(&format!("{}/{max_rows}\n\n", snapshot.final_row + 1));
    } else {
        text.push_str("Failed\n\n");
    }

    for row in &snapshot.statuses {
        for status in row {
            text.push_str(status.emoji());
        }
        text.push('\n');
    }

    text
}

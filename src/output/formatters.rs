//! Formatting utilities for terminal output

use crate::core::LetterResult;
use crate::game::{GuessRecord, LetterStates};
use colored::{ColoredString, Colorize};

/// Keyboard rows in QWERTY order
const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Style a single uppercase letter tile for a result
fn tile(letter: char, result: Option<LetterResult>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match result {
        Some(LetterResult::Hit) => text.black().on_green().bold(),
        Some(LetterResult::Present) => text.black().on_yellow().bold(),
        Some(LetterResult::Miss) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Colored tiles for a guess, one per letter
#[must_use]
pub fn colored_guess(record: &GuessRecord) -> String {
    record
        .word()
        .text()
        .chars()
        .zip(record.feedback().results())
        .map(|(letter, &result)| tile(letter, Some(result)).to_string())
        .collect()
}

/// A guess row as `WORD 🟩⬜🟨⬜⬜`
#[must_use]
pub fn guess_row(record: &GuessRecord) -> String {
    format!(
        "{} {}",
        record.word().text().to_uppercase(),
        record.feedback().to_emoji()
    )
}

/// Keyboard rows shaded by what each letter is known to be
#[must_use]
pub fn keyboard_rows(states: &LetterStates) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|letter| tile(letter, states.get(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// "1 guess", "3 guesses"
#[must_use]
pub fn guess_count(count: usize) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

//! Display functions for game and command results

use super::formatters::{colored_guess, create_progress_bar, guess_count, guess_row, keyboard_rows};
use crate::commands::{CheckResult, CheckStep, Statistics};
use crate::core::GameError;
use crate::game::{GuessRecord, LetterStates, Status};
use colored::Colorize;

/// Print the board: every guess so far plus the keyboard
pub fn print_board(history: &[GuessRecord], states: &LetterStates, attempts_remaining: usize) {
    println!();
    for record in history {
        println!("  {}  {}", colored_guess(record), record.feedback().to_emoji());
    }
    println!();
    for row in keyboard_rows(states) {
        println!("  {row}");
    }
    println!(
        "\n{} {}",
        "Guesses left:".bright_black(),
        attempts_remaining.to_string().bright_yellow()
    );
}

/// Print why a guess was rejected
pub fn print_rejection(error: &GameError) {
    println!("{} {error}", "✗".red().bold());
}

/// Print the end-of-round message
pub fn print_round_over(status: Status, guesses: usize, secret: &str) {
    println!();
    match status {
        Status::Won => println!(
            "{}",
            format!("🎉 You won in {}!", guess_count(guesses)).green().bold()
        ),
        Status::Lost => println!(
            "{} {}",
            "The word was:".red().bold(),
            secret.to_uppercase().bright_yellow().bold()
        ),
        Status::InProgress => {}
    }
}

/// Print the result of a scripted check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}",
        result.secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        match step {
            CheckStep::Accepted { record, .. } => {
                println!("{:>2}. {}", i + 1, guess_row(record));
            }
            CheckStep::Rejected { guess, error } => {
                println!("{:>2}. {} {}", i + 1, guess.to_uppercase(), error.to_string().red());
            }
        }
    }

    println!();
    match result.status {
        Status::Won => println!(
            "{}",
            format!("✅ Solved in {}", guess_count(result.accepted())).green().bold()
        ),
        Status::Lost => println!(
            "{}",
            format!("❌ Not solved in {}", guess_count(result.accepted())).red().bold()
        ),
        Status::InProgress => println!(
            "{}",
            format!("… Unfinished after {}", guess_count(result.accepted())).yellow()
        ),
    }
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    if stats.total_games == 0 {
        return;
    }

    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());
    println!("   Played:    {}", stats.total_games);
    println!(
        "   Won:       {} ({:.0}%)",
        stats.games_won,
        stats.win_percentage()
    );

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count, most, 30);
        println!("   {guesses:>2}: {} {count}", bar.green());
    }
}

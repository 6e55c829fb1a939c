//! Interactive play mode
//!
//! Reads guesses line by line, feeds them to a session and prints the board.
//! Any `BufRead` works as input, so the loop can be driven from stdin or from
//! a script in tests.

use crate::game::{SecretPicker, Session, Status};
use crate::output::{print_board, print_rejection, print_round_over, print_statistics};
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Results of the rounds finished in one play session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts rounds won with `n` guesses; index 0 is unused
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; max_guesses + 1],
        }
    }

    /// Record a finished round; unfinished rounds are ignored
    pub fn record(&mut self, status: Status, guesses: usize) {
        match status {
            Status::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if guesses >= self.guess_distribution.len() {
                    self.guess_distribution.resize(guesses + 1, 0);
                }
                self.guess_distribution[guesses] += 1;
            }
            Status::Lost => self.total_games += 1,
            Status::InProgress => {}
        }
    }

    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.games_won as f64 * 100.0 / self.total_games as f64
    }
}

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum PlayInput {
    Guess(String),
    NewRound,
    Quit,
}

fn parse_input(line: &str, is_word: impl Fn(&str) -> bool) -> PlayInput {
    let input = line.trim().to_lowercase();
    if is_word(&input) {
        return PlayInput::Guess(input);
    }
    match input.as_str() {
        "quit" | "exit" | "q" => PlayInput::Quit,
        "new" | "n" => PlayInput::NewRound,
        _ => PlayInput::Guess(input),
    }
}

/// Print a prompt and read one line; `None` at end of input
fn read_line<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt} ");
    io::stdout().flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Run the interactive game loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing to stdout fails.
pub fn run_play<P: SecretPicker, R: BufRead>(
    session: &mut Session<'_, P>,
    mut reader: R,
) -> Result<Statistics> {
    let corpus = session.corpus();
    let mut stats = Statistics::new(session.max_guesses());

    println!(
        "Guess the {}-letter word in {} tries.",
        corpus.word_length(),
        session.max_guesses()
    );
    println!("Commands: 'new' for a new word, 'quit' to exit.\n");

    loop {
        if session.status().is_over() {
            let status = session.status();
            let guesses = session.history().len();
            stats.record(status, guesses);
            let secret = session
                .revealed_secret()
                .map(ToString::to_string)
                .unwrap_or_default();
            print_round_over(status, guesses, &secret);

            let Some(answer) = read_line(&mut reader, "Play again? [y/N]")? else {
                break;
            };
            if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                break;
            }
            session.reset(corpus)?;
            println!();
            continue;
        }

        let prompt = format!(
            "Guess {}/{}:",
            session.history().len() + 1,
            session.max_guesses()
        );
        let Some(line) = read_line(&mut reader, &prompt)? else {
            break;
        };

        match parse_input(&line, |word| corpus.contains(word)) {
            PlayInput::Quit => break,
            PlayInput::NewRound => {
                session.reset(corpus)?;
                println!("New word chosen.\n");
            }
            PlayInput::Guess(guess) => match session.submit_guess(&guess) {
                Ok(_) => print_board(
                    session.history(),
                    &session.letter_states(),
                    session.attempts_remaining(),
                ),
                Err(e) => print_rejection(&e),
            },
        }
    }

    print_statistics(&stats);
    println!("\n👋 Thanks for playing!");
    Ok(stats)
}

//! Wordle Game
//!
//! A Wordle-style word guessing game with correct duplicate-letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Corpus, Word};
//! use wordle_game::game::{RandomPicker, Session, Status};
//!
//! let corpus = Corpus::from_words(["crane", "slate"].map(|w| Word::new(w).unwrap())).unwrap();
//! let mut session = Session::new(&corpus, RandomPicker::seeded(7)).unwrap();
//!
//! let (record, status) = session.submit_guess("crane").unwrap();
//! println!("{} {}", record.word(), record.feedback().to_emoji());
//! assert!(status == Status::Won || status == Status::InProgress);
//! ```

// Core domain types
pub mod core;

// Session state machine and secret selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Game error taxonomy
//!
//! Every failure here is recoverable: it is reported to the caller and leaves
//! session state untouched.

use crate::game::Status;
use std::fmt;

/// Errors raised by the evaluator, the corpus and the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Two words that must share a length do not
    LengthMismatch { expected: usize, actual: usize },
    /// A submitted guess has the wrong number of letters
    InvalidLength { expected: usize, actual: usize },
    /// A submitted guess is not a word in the corpus
    NotInCorpus(String),
    /// The round already finished with the given status
    GameAlreadyOver(Status),
    /// No secret can be drawn
    EmptyCorpus,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Word length mismatch: expected {expected}, got {actual}")
            }
            Self::InvalidLength { expected, actual } => {
                write!(f, "Guess must be exactly {expected} letters, got {actual}")
            }
            Self::NotInCorpus(word) => {
                write!(f, "'{}' is not in the word list", word.to_uppercase())
            }
            Self::GameAlreadyOver(status) => {
                write!(f, "The round is already over ({status})")
            }
            Self::EmptyCorpus => write!(f, "The word list is empty"),
        }
    }
}

impl std::error::Error for GameError {}

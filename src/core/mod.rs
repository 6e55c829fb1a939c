//! Core domain types for the game
//!
//! Words, the corpus, guess feedback and the error taxonomy. Nothing in here
//! performs I/O, and feedback calculation is a pure function.

mod corpus;
mod error;
mod feedback;
mod word;

pub use corpus::Corpus;
pub use error::GameError;
pub use feedback::{Feedback, LetterResult};
pub use word::{WORD_LENGTH, Word, WordError};

//! Word lists for the game
//!
//! Provides the embedded word list and loaders that turn raw lists into a
//! validated [`Corpus`](crate::core::Corpus).

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

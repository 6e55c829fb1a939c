//! Word list loading utilities
//!
//! Turns raw word lists (embedded constants or whitespace-delimited files) into
//! a validated [`Corpus`].

use super::WORDS;
use crate::core::{Corpus, GameError, WORD_LENGTH, Word};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse whitespace-delimited words
///
/// Tokens that are not plain ASCII words (numbers, punctuation, `#` comments)
/// are skipped; length is checked later by [`Corpus`].
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(str::split_whitespace)
        .filter_map(|token| match Word::new(token) {
            Ok(word) => Some(word),
            Err(e) => {
                log::debug!("skipping word list entry '{token}': {e}");
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        log::warn!("skipped {skipped} invalid word list entries");
    }
    words
}

/// Load words from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    Ok(words_from_str(&content))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Corpus built from the embedded word list
///
/// # Errors
///
/// Fails only if the embedded list is empty or not uniformly five letters.
pub fn embedded_corpus() -> Result<Corpus, GameError> {
    Corpus::new(words_from_slice(WORDS), WORD_LENGTH)
}

/// Corpus built from a word list file, word length taken from the first entry
///
/// # Errors
///
/// Returns an error if the file cannot be read, holds no words, or mixes
/// word lengths.
pub fn corpus_from_file<P: AsRef<Path>>(path: P) -> Result<Corpus> {
    let path = path.as_ref();
    let words = load_from_file(path)?;
    let corpus = Corpus::from_words(words)
        .with_context(|| format!("invalid word list {}", path.display()))?;
    log::info!(
        "loaded {} words of length {} from {}",
        corpus.len(),
        corpus.word_length(),
        path.display()
    );
    Ok(corpus)
}

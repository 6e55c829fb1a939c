//! Word representation
//!
//! A Word stores a lowercase ASCII word along with its raw bytes for feedback calculation.

use rustc_hash::FxHashMap;
use std::fmt;

/// Canonical word length for a game
pub const WORD_LENGTH: usize = 5;

/// A lowercase ASCII word
///
/// Any length is accepted here; the corpus decides which length a game uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is trimmed and lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed input is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
        assert_eq!(word.len(), WORD_LENGTH);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("  CrAnE\n").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_other_lengths_allowed() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("planets").unwrap().len(), 7);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crâne"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'p'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b'd'), Some(&1));
        assert_eq!(counts.get(&b'z'), None);
    }

    #[test]
    fn word_char_counts_all_same() {
        let word = Word::new("aaaaa").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&b'a'), Some(&5));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Slate".parse().unwrap();
        assert_eq!(format!("{word}"), "slate");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}

//! The set of legal words for a game
//!
//! A corpus is both the pool secrets are drawn from and the legality check for
//! guesses. It is immutable once built and can be borrowed by any number of
//! sessions.

use super::{GameError, Word};
use rustc_hash::FxHashMap;

/// Immutable, uniform-length word set with stable indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
    word_length: usize,
}

impl Corpus {
    /// Build a corpus whose words all have `word_length` letters
    ///
    /// Duplicate entries are kept once, in first-seen order. An empty corpus is
    /// allowed here; sessions refuse to start on one.
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` for the first word of a different length.
    pub fn new(words: impl IntoIterator<Item = Word>, word_length: usize) -> Result<Self, GameError> {
        let mut unique = Vec::new();
        let mut index = FxHashMap::default();

        for word in words {
            if word.len() != word_length {
                return Err(GameError::LengthMismatch {
                    expected: word_length,
                    actual: word.len(),
                });
            }
            if index.contains_key(word.text()) {
                log::trace!("skipping duplicate corpus entry '{word}'");
                continue;
            }
            index.insert(word.text().to_string(), unique.len());
            unique.push(word);
        }

        Ok(Self {
            words: unique,
            index,
            word_length,
        })
    }

    /// Build a corpus, taking the word length from the first word
    ///
    /// # Errors
    /// Returns `GameError::EmptyCorpus` if there are no words, or
    /// `GameError::LengthMismatch` if lengths are not uniform.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Corpus, Word};
    ///
    /// let words = ["crane", "slate"].map(|w| Word::new(w).unwrap());
    /// let corpus = Corpus::from_words(words).unwrap();
    /// assert_eq!(corpus.word_length(), 5);
    /// assert!(corpus.contains("SLATE"));
    /// ```
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Result<Self, GameError> {
        let mut words = words.into_iter().peekable();
        let word_length = words.peek().map(Word::len).ok_or(GameError::EmptyCorpus)?;
        Self::new(words, word_length)
    }

    /// Letters per word in this corpus
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in insertion order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word at a given index
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Look up a word, ignoring case and surrounding whitespace
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<&Word> {
        self.index_of(text).map(|i| &self.words[i])
    }

    /// Index of a word, ignoring case and surrounding whitespace
    #[must_use]
    pub fn index_of(&self, text: &str) -> Option<usize> {
        let normalized = text.trim().to_lowercase();
        self.index.get(&normalized).copied()
    }

    /// Case-insensitive membership check
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index_of(text).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn corpus_from_words_infers_length() {
        let corpus = Corpus::from_words(words(&["crane", "slate", "irate"])).unwrap();

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.word_length(), 5);
        assert_eq!(corpus.get(1).map(Word::text), Some("slate"));
    }

    #[test]
    fn corpus_from_words_empty() {
        assert_eq!(Corpus::from_words(Vec::new()), Err(GameError::EmptyCorpus));
    }

    #[test]
    fn corpus_new_allows_empty() {
        let corpus = Corpus::new(Vec::new(), 5).unwrap();
        assert!(corpus.is_empty());
        assert_eq!(corpus.word_length(), 5);
    }

    #[test]
    fn corpus_rejects_mixed_lengths() {
        let result = Corpus::from_words(words(&["crane", "cranes"]));
        assert_eq!(
            result,
            Err(GameError::LengthMismatch {
                expected: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn corpus_deduplicates() {
        let corpus = Corpus::from_words(words(&["crane", "slate", "CRANE"])).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.index_of("crane"), Some(0));
        assert_eq!(corpus.index_of("slate"), Some(1));
    }

    #[test]
    fn corpus_lookup_is_case_insensitive() {
        let corpus = Corpus::from_words(words(&["crane", "slate"])).unwrap();

        assert!(corpus.contains("crane"));
        assert!(corpus.contains("CrAnE"));
        assert!(corpus.contains(" slate\n"));
        assert!(!corpus.contains("zzzzz"));
        assert_eq!(corpus.lookup("SLATE").map(Word::text), Some("slate"));
    }
}

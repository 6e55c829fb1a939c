//! Per-letter knowledge accumulated over a round
//!
//! Front ends use this to shade an on-screen keyboard. Each letter keeps the
//! strongest result it has received so far, so a confirmed hit is never
//! downgraded by a later miss of the same letter.

use super::GuessRecord;
use crate::core::LetterResult;
use rustc_hash::FxHashMap;

/// Best-known result for each letter guessed this round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStates {
    states: FxHashMap<u8, LetterResult>,
}

impl LetterStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the results of one guess into the known states
    pub fn record(&mut self, record: &GuessRecord) {
        for (&letter, &result) in record.word().chars().iter().zip(record.feedback().results()) {
            self.states
                .entry(letter)
                .and_modify(|known| *known = (*known).max(result))
                .or_insert(result);
        }
    }

    /// State for a letter, `None` if it has not been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterResult> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.states.get(&(letter.to_ascii_lowercase() as u8)).copied()
    }

    /// Number of distinct letters guessed
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Letters (lowercase, alphabetical) that currently have the given state
    #[must_use]
    pub fn letters_with(&self, state: LetterResult) -> Vec<char> {
        let mut letters: Vec<char> = self
            .states
            .iter()
            .filter(|&(_, &s)| s == state)
            .map(|(&letter, _)| letter as char)
            .collect();
        letters.sort_unstable();
        letters
    }
}

impl<'a> FromIterator<&'a GuessRecord> for LetterStates {
    fn from_iter<I: IntoIterator<Item = &'a GuessRecord>>(iter: I) -> Self {
        let mut states = Self::new();
        for record in iter {
            states.record(record);
        }
        states
    }
}

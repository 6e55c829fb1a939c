//! Game session state machine
//!
//! A session owns one secret at a time and walks through
//! `InProgress -> Won | Lost`. Only `submit_guess` and `reset` mutate it, and
//! every failed submission leaves it exactly as it was.

use super::{LetterStates, SecretPicker};
use crate::core::{Corpus, Feedback, GameError, Word};
use log::{debug, info, trace};
use std::fmt;

/// Default number of guesses per round
pub const NUM_GUESSES: usize = 6;

/// Round status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    /// True once the round has ended
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// A submitted guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    feedback: Feedback,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(word: Word, feedback: Feedback) -> Self {
        Self { word, feedback }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// One player's game against a corpus
///
/// Invariant: `history().len() + attempts_remaining() == max_guesses()`.
#[derive(Debug)]
pub struct Session<'c, P: SecretPicker> {
    corpus: &'c Corpus,
    picker: P,
    secret: Word,
    history: Vec<GuessRecord>,
    max_guesses: usize,
    attempts_remaining: usize,
    status: Status,
}

impl<'c, P: SecretPicker> Session<'c, P> {
    /// Start a round with the default number of guesses
    ///
    /// # Errors
    /// Returns `GameError::EmptyCorpus` if the corpus has no words.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Corpus, Word};
    /// use wordle_game::game::{FixedPicker, Session, Status};
    ///
    /// let corpus = Corpus::from_words(["crane", "slate"].map(|w| Word::new(w).unwrap())).unwrap();
    /// let mut session = Session::new(&corpus, FixedPicker::always(1)).unwrap();
    ///
    /// let (record, status) = session.submit_guess("CRANE").unwrap();
    /// assert_eq!(record.feedback().to_string(), "--G-G");
    /// assert_eq!(status, Status::InProgress);
    ///
    /// let (_, status) = session.submit_guess("slate").unwrap();
    /// assert_eq!(status, Status::Won);
    /// ```
    pub fn new(corpus: &'c Corpus, picker: P) -> Result<Self, GameError> {
        Self::with_max_guesses(corpus, picker, NUM_GUESSES)
    }

    /// Start a round allowing `max_guesses` attempts (at least one)
    ///
    /// # Errors
    /// Returns `GameError::EmptyCorpus` if the corpus has no words.
    pub fn with_max_guesses(
        corpus: &'c Corpus,
        mut picker: P,
        max_guesses: usize,
    ) -> Result<Self, GameError> {
        let secret = draw_secret(corpus, &mut picker)?;
        let max_guesses = max_guesses.max(1);

        Ok(Self {
            corpus,
            picker,
            secret,
            history: Vec::with_capacity(max_guesses),
            max_guesses,
            attempts_remaining: max_guesses,
            status: Status::InProgress,
        })
    }

    /// Submit a raw guess
    ///
    /// Input is trimmed and lowercased before validation. Returns the new
    /// record together with the status after the guess.
    ///
    /// # Errors
    /// - `GameAlreadyOver` if the round has ended
    /// - `InvalidLength` if the guess has the wrong number of letters
    /// - `NotInCorpus` if the guess is not a corpus word
    ///
    /// None of these change the session.
    pub fn submit_guess(&mut self, raw_input: &str) -> Result<(GuessRecord, Status), GameError> {
        if self.status.is_over() {
            debug!("rejected guess '{raw_input}': round already {}", self.status);
            return Err(GameError::GameAlreadyOver(self.status));
        }

        let candidate = raw_input.trim().to_lowercase();
        let length = candidate.chars().count();
        if length != self.corpus.word_length() {
            debug!("rejected guess '{candidate}': {length} letters");
            return Err(GameError::InvalidLength {
                expected: self.corpus.word_length(),
                actual: length,
            });
        }

        let Some(word) = self.corpus.lookup(&candidate) else {
            debug!("rejected guess '{candidate}': not in corpus");
            return Err(GameError::NotInCorpus(candidate));
        };

        let feedback = Feedback::calculate(word, &self.secret)?;
        let record = GuessRecord::new(word.clone(), feedback);

        self.history.push(record.clone());
        self.attempts_remaining -= 1;

        if *word == self.secret {
            self.status = Status::Won;
        } else if self.attempts_remaining == 0 {
            self.status = Status::Lost;
        }

        debug!(
            "guess {} '{}' -> {} ({} left)",
            self.history.len(),
            record.word(),
            record.feedback(),
            self.attempts_remaining
        );
        if self.status.is_over() {
            info!("round {} after {} guesses", self.status, self.history.len());
        }

        Ok((record, self.status))
    }

    /// Abandon the current round and start a new one on `corpus`
    ///
    /// Works in any state. The attempt limit is kept.
    ///
    /// # Errors
    /// Returns `GameError::EmptyCorpus` if `corpus` has no words; the current
    /// round is left untouched in that case.
    pub fn reset(&mut self, corpus: &'c Corpus) -> Result<(), GameError> {
        let secret = draw_secret(corpus, &mut self.picker)?;

        self.corpus = corpus;
        self.secret = secret;
        self.history.clear();
        self.attempts_remaining = self.max_guesses;
        self.status = Status::InProgress;

        debug!("new round started");
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Guesses of the current round in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub const fn corpus(&self) -> &'c Corpus {
        self.corpus
    }

    /// The secret, available only once the round is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.status.is_over().then_some(&self.secret)
    }

    /// Best-known state of every letter guessed this round
    #[must_use]
    pub fn letter_states(&self) -> LetterStates {
        self.history.iter().collect()
    }
}

fn draw_secret<P: SecretPicker>(corpus: &Corpus, picker: &mut P) -> Result<Word, GameError> {
    if corpus.is_empty() {
        return Err(GameError::EmptyCorpus);
    }
    let index = picker.pick_index(corpus.len()) % corpus.len();
    let secret = corpus.get(index).cloned().ok_or(GameError::EmptyCorpus)?;
    trace!("drew secret #{index} '{secret}'");
    Ok(secret)
}

//! Scripted check command
//!
//! Plays a fixed list of guesses against a named secret and reports what the
//! session said about each one.

use crate::core::{Corpus, GameError};
use crate::game::{FixedPicker, GuessRecord, Session, Status};

/// Outcome of one scripted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStep {
    Accepted { record: GuessRecord, status: Status },
    Rejected { guess: String, error: GameError },
}

/// Result of checking a guess list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub secret: String,
    pub steps: Vec<CheckStep>,
    pub status: Status,
}

impl CheckResult {
    /// Number of guesses the session accepted
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, CheckStep::Accepted { .. }))
            .count()
    }
}

/// Run `guesses` against `secret`
///
/// Every guess is submitted, including ones after the round ended, so the
/// result shows each rejection the session produced.
///
/// # Errors
///
/// Returns `GameError::NotInCorpus` if the secret is not a corpus word, or
/// `GameError::EmptyCorpus` if the corpus is empty.
pub fn check_guesses(
    corpus: &Corpus,
    secret: &str,
    guesses: &[String],
    max_guesses: usize,
) -> Result<CheckResult, GameError> {
    if corpus.is_empty() {
        return Err(GameError::EmptyCorpus);
    }
    let index = corpus
        .index_of(secret)
        .ok_or_else(|| GameError::NotInCorpus(secret.trim().to_lowercase()))?;
    let mut session = Session::with_max_guesses(corpus, FixedPicker::always(index), max_guesses)?;

    let steps = guesses
        .iter()
        .map(|guess| match session.submit_guess(guess) {
            Ok((record, status)) => CheckStep::Accepted { record, status },
            Err(error) => CheckStep::Rejected {
                guess: guess.clone(),
                error,
            },
        })
        .collect();

    Ok(CheckResult {
        secret: corpus.get(index).map(ToString::to_string).unwrap_or_default(),
        steps,
        status: session.status(),
    })
}

//! Guess feedback calculation and representation
//!
//! Each guess position is classified as one of:
//! - Miss (letter has no uncredited occurrence left in the secret)
//! - Present (letter is in the secret, but not at this position)
//! - Hit (letter is in the correct position)

use super::{GameError, Word};

/// Classification of a single guessed letter
///
/// Ordered by strength: `Miss < Present < Hit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterResult {
    Miss,
    Present,
    Hit,
}

impl LetterResult {
    /// Single-character code: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Hit => 'G',
            Self::Present => 'Y',
            Self::Miss => '-',
        }
    }

    /// Emoji square for this result
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬜',
        }
    }

    /// Parse a result from `G`/`g`/🟩, `Y`/`y`/🟨 or `-`/`_`/`X`/`x`/⬜
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Hit),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | 'X' | 'x' | '⬜' => Some(Self::Miss),
            _ => None,
        }
    }
}

/// Per-letter feedback for one guess, index-aligned with the guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterResult>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Implements Wordle's two-pass rules so repeated letters are only credited
    /// as many times as they occur in the secret.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches as hits and remove them from the available pool
    /// 2. Second pass, left to right: mark present letters from the remaining pool
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if the two words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let secret = Word::new("abide").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret).unwrap();
    ///
    /// // ABIDE has a single E, so only the first guessed E is credited
    /// assert_eq!(feedback.to_string(), "--Y-Y");
    /// ```
    pub fn calculate(guess: &Word, secret: &Word) -> Result<Self, GameError> {
        if guess.len() != secret.len() {
            return Err(GameError::LengthMismatch {
                expected: secret.len(),
                actual: guess.len(),
            });
        }

        let guess_chars = guess.chars();
        let secret_chars = secret.chars();
        let mut result = vec![LetterResult::Miss; guess.len()];
        let mut secret_available = secret.char_counts();

        // First pass: exact position matches
        for (i, (&g, &s)) in guess_chars.iter().zip(secret_chars).enumerate() {
            if g == s {
                result[i] = LetterResult::Hit;
                if let Some(count) = secret_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present elsewhere, from whatever the hits left over
        for (slot, &letter) in result.iter_mut().zip(guess_chars) {
            if *slot == LetterResult::Hit {
                continue;
            }
            if let Some(count) = secret_available.get_mut(&letter)
                && *count > 0
            {
                *slot = LetterResult::Present;
                *count -= 1;
            }
        }

        Ok(Self(result))
    }

    /// Results in guess order
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[LetterResult] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is a hit
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&r| r == LetterResult::Hit)
    }

    /// Count the number of hits
    #[must_use]
    pub fn count_hits(&self) -> usize {
        self.count(LetterResult::Hit)
    }

    /// Count the number of present-elsewhere letters
    #[must_use]
    pub fn count_presents(&self) -> usize {
        self.count(LetterResult::Present)
    }

    fn count(&self, kind: LetterResult) -> usize {
        self.0.iter().filter(|&&r| r == kind).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let results: Option<Vec<LetterResult>> = s.chars().map(LetterResult::from_char).collect();
        results.filter(|r| !r.is_empty()).map(Self)
    }

    /// Convert feedback to an emoji string such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.emoji()).collect()
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for result in &self.0 {
            write!(f, "{}", result.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

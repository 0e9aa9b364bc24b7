//! Word budget configuration.
//!
//! ## The Problem
//!
//! Summarization models take a bounded amount of input. A chunk that is too
//! large gets truncated; one that is too small loses the surrounding argument.
//! `max_words` is the knob between the two.
//!
//! The budget is soft in exactly one direction: a single sentence longer than
//! the budget is kept whole rather than cut mid-sentence.
//!
//! ```text
//! max_words = 5
//!
//! ["One two three.", "Four five.", "Six seven eight nine ten eleven."]
//!   3 words           2 words       6 words (oversized)
//!
//! -> ["One two three. Four five.", "Six seven eight nine ten eleven."]
//!      5 words (== budget)          6 words (alone, never split)
//! ```

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default words per chunk.
pub const DEFAULT_MAX_WORDS: usize = 500;

/// A validated, non-zero word budget per chunk.
///
/// # Examples
///
/// ```rust
/// use booksplit::WordBudget;
///
/// let budget = WordBudget::new(300).unwrap();
/// assert_eq!(budget.max_words(), 300);
///
/// assert_eq!(WordBudget::default().max_words(), 500);
/// assert!(WordBudget::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct WordBudget {
    max_words: usize,
}

impl WordBudget {
    /// Create a budget of `max_words` words per chunk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWordBudget`] if `max_words == 0`.
    pub fn new(max_words: usize) -> Result<Self> {
        if max_words == 0 {
            return Err(Error::InvalidWordBudget(max_words));
        }
        Ok(Self { max_words })
    }

    /// The maximum number of words per chunk.
    #[must_use]
    pub const fn max_words(&self) -> usize {
        self.max_words
    }

    /// Check if adding `additional` words to a chunk of `current` words
    /// would exceed the budget.
    #[must_use]
    pub fn would_overflow(&self, current: usize, additional: usize) -> bool {
        current.saturating_add(additional) > self.max_words
    }
}

impl Default for WordBudget {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

impl TryFrom<usize> for WordBudget {
    type Error = Error;

    fn try_from(max_words: usize) -> Result<Self> {
        Self::new(max_words)
    }
}

impl From<WordBudget> for usize {
    fn from(budget: WordBudget) -> Self {
        budget.max_words
    }
}

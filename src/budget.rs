//! Word budget configuration.
//!
//! ## Why Words, Not Bytes
//!
//! The input limit of a summarization model is effectively a token limit,
//! and words track tokens far better than bytes do. "Naïve" is five bytes
//! in one encoding and seven in another; it is one word everywhere.
//!
//! ## The Budget Is a Ceiling for Groups, Not Sentences
//!
//! ```text
//! budget = 10
//!
//! "Short one. Short two."              -> one chunk (4 words)
//! "A twelve word sentence that just keeps going on and on here."
//!                                      -> one chunk (12 words, over budget)
//! ```
//!
//! A single sentence larger than the budget still ships whole. Splitting it
//! would hand the model a fragment that stops mid-clause; the budget bounds
//! how many sentences get *grouped*, never how long one sentence may be.

use serde::{Deserialize, Serialize};

/// Maximum number of words per chunk.
///
/// Validated at construction: a budget of zero would make every sentence
/// "too big" and is rejected.
///
/// # Examples
///
/// ```rust
/// use gist::WordBudget;
///
/// let budget = WordBudget::new(500).unwrap();
/// assert_eq!(budget.max_words(), 500);
///
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
    /// Returns an error if `max_words == 0`.
    pub fn new(max_words: usize) -> Result<Self, BudgetError> {
        if max_words == 0 {
            Err(BudgetError::Zero)
        } else {
            Ok(Self { max_words })
        }
    }

    /// The maximum words allowed in one chunk.
    #[must_use]
    pub const fn max_words(&self) -> usize {
        self.max_words
    }

    /// Whether adding `additional` words to a chunk currently holding
    /// `current` words would push it past the budget.
    #[must_use]
    pub fn would_overflow(&self, current: usize, additional: usize) -> bool {
        current.saturating_add(additional) > self.max_words
    }
}

impl Default for WordBudget {
    fn default() -> Self {
        // Roughly the input window of common summarization checkpoints.
        Self { max_words: 1000 }
    }
}

impl TryFrom<usize> for WordBudget {
    type Error = BudgetError;

    fn try_from(max_words: usize) -> Result<Self, Self::Error> {
        Self::new(max_words)
    }
}

impl From<WordBudget> for usize {
    fn from(budget: WordBudget) -> Self {
        budget.max_words
    }
}

/// Error when configuring a word budget.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BudgetError {
    /// Word budget must be at least 1.
    #[error("word budget must be at least 1")]
    Zero,
}

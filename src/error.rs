//! Error types for gist.

use crate::budget::BudgetError;

/// Errors that terminate a summarization request.
///
/// Per-chunk model failures are *not* here: they are recovered inside the
/// pipeline (see [`crate::ChunkOutcome`]) and only surface as
/// [`Error::EmptySummary`] when every chunk failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No summarization model is loaded. Fatal for the request; the caller
    /// must fix the deployment, not resubmit.
    #[error("no summarization model is loaded")]
    ModelUnavailable,

    /// The input contained no extractable sentences.
    #[error("input text is empty or contains no sentences")]
    EmptyInput,

    /// Every chunk failed to summarize, leaving nothing to aggregate.
    #[error("summarization produced no output: all chunks failed")]
    EmptySummary,

    /// Invalid word budget.
    #[error(transparent)]
    Budget(#[from] BudgetError),

    /// PDF text extraction failed.
    #[cfg(feature = "pdf")]
    #[error("text extraction failed: {0}")]
    Extraction(String),
}

/// Result type for gist operations.
pub type Result<T> = std::result::Result<T, Error>;

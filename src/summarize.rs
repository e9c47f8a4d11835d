//! The summarization pipeline: chunk, call the model per chunk, stitch.
//!
//! ## Per-Chunk Failure Is Not Request Failure
//!
//! With twenty chunks in flight, one transport hiccup should cost one
//! chunk's contribution, not the whole document. Each chunk therefore
//! produces an explicit [`ChunkOutcome`] rather than an early return:
//! the aggregation step sees the full sequence of outcomes and reasons
//! about it directly.
//!
//! Failures are recorded (`tracing::warn!` with chunk index and reason)
//! and omitted from the join—no placeholder text, no reordering. Only
//! when *every* outcome is a failure does the request fail, with
//! [`Error::EmptySummary`].
//!
//! ## One Request, One Pass
//!
//! The pipeline is synchronous and sequential: chunk `i` is summarized
//! before chunk `i + 1` is attempted. There is no retry, no timeout, and
//! no cancellation in this layer; callers that want background execution
//! dispatch the whole call onto whatever scheduler they already have (see
//! [`crate::SummaryService::handle_with`]).

use std::sync::Arc;

use serde::Serialize;

use crate::chunk::{Chunk, WordBudgetChunker};
use crate::model::{ModelConfig, ModelError, SummaryModel, SummaryOutput};
use crate::segment::{Segmenter, UnicodeSegmenter};
use crate::{Error, Result, WordBudget};

/// Tunables for one summarization request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarizeOptions {
    /// Word budget per chunk.
    pub budget: WordBudget,
    /// Decoding configuration forwarded to the model on every call.
    pub model: ModelConfig,
    /// How many leading sentences of the final summary to surface as key
    /// sentences.
    pub top_n: usize,
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self {
            budget: WordBudget::default(),
            model: ModelConfig::default(),
            top_n: 3,
        }
    }
}

/// The result of summarizing one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// The chunk's normalized partial summary.
    Summarized(String),
    /// The chunk failed; it contributes nothing to the final summary.
    Failed {
        /// Index of the failed chunk.
        index: usize,
        /// Why it failed.
        reason: ModelError,
    },
}

impl ChunkOutcome {
    /// The partial summary, if this chunk succeeded.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Summarized(s) => Some(s),
            Self::Failed { .. } => None,
        }
    }

    /// Whether this chunk failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// A completed summarization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// The final summary: successful partials joined in chunk order.
    pub text: String,
    /// The first `top_n` sentences of `text`, in order. Positional
    /// highlights, not a ranked extract.
    pub key_sentences: Vec<String>,
    /// How many chunks the input produced.
    pub chunks: usize,
    /// How many of them failed and were omitted.
    pub failed: usize,
}

/// Chunk-and-aggregate summarization over an injected model.
///
/// Holds the process-wide model handle (shared, read-only) and a sentence
/// segmenter. Construction is cheap; one instance serves many requests.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use gist::{
///     DocumentSummarizer, ModelConfig, ModelError, SummarizeOptions, SummaryModel,
///     SummaryOutput,
/// };
///
/// struct Upper;
/// impl SummaryModel for Upper {
///     fn summarize(&self, chunk: &str, _: &ModelConfig) -> Result<SummaryOutput, ModelError> {
///         Ok(SummaryOutput::Text(chunk.to_uppercase()))
///     }
/// }
///
/// let summarizer = DocumentSummarizer::new(Arc::new(Upper));
/// let summary = summarizer
///     .summarize("Keep it short.", &SummarizeOptions::default())
///     .unwrap();
/// assert_eq!(summary.text, "KEEP IT SHORT.");
/// ```
pub struct DocumentSummarizer {
    model: Arc<dyn SummaryModel>,
    segmenter: Arc<dyn Segmenter>,
}

impl DocumentSummarizer {
    /// Create a summarizer over `model` with the default UAX #29 segmenter.
    #[must_use]
    pub fn new(model: Arc<dyn SummaryModel>) -> Self {
        Self {
            model,
            segmenter: Arc::new(UnicodeSegmenter),
        }
    }

    /// Replace the sentence segmenter used for chunking and key-sentence
    /// extraction.
    #[must_use]
    pub fn with_segmenter(mut self, segmenter: Arc<dyn Segmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Run the full pipeline over `text`.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] when `text` yields no chunks.
    /// - [`Error::EmptySummary`] when every chunk fails.
    pub fn summarize(&self, text: &str, opts: &SummarizeOptions) -> Result<Summary> {
        let chunker =
            WordBudgetChunker::new(opts.budget).with_segmenter(Arc::clone(&self.segmenter));
        let chunks = chunker.split(text);
        if chunks.is_empty() {
            return Err(Error::EmptyInput);
        }
        tracing::debug!(
            chunks = chunks.len(),
            budget = opts.budget.max_words(),
            "input chunked"
        );

        let outcomes = self.summarize_chunks(&chunks, &opts.model);
        let failed = outcomes.iter().filter(|o| o.is_failed()).count();

        let partials: Vec<&str> = outcomes.iter().filter_map(ChunkOutcome::text).collect();
        let joined = partials.join(" ").trim().to_string();
        if joined.is_empty() {
            return Err(Error::EmptySummary);
        }
        tracing::debug!(
            contributed = chunks.len() - failed,
            failed,
            "partials aggregated"
        );

        let key_sentences = self.key_sentences(&joined, opts.top_n);

        Ok(Summary {
            text: joined,
            key_sentences,
            chunks: chunks.len(),
            failed,
        })
    }

    /// Summarize each chunk in order, recovering per-chunk failures.
    ///
    /// The returned outcomes parallel `chunks`: one entry per chunk, in the
    /// same order. Successful raw outputs are normalized to plain text; a
    /// shape with no usable text counts as that chunk's failure.
    pub fn summarize_chunks(&self, chunks: &[Chunk], config: &ModelConfig) -> Vec<ChunkOutcome> {
        chunks
            .iter()
            .map(|chunk| {
                let result = self
                    .model
                    .summarize(&chunk.text, config)
                    .and_then(SummaryOutput::into_text);
                match result {
                    Ok(partial) => ChunkOutcome::Summarized(partial),
                    Err(reason) => {
                        tracing::warn!(
                            chunk = chunk.index,
                            error = %reason,
                            "chunk failed; continuing without it"
                        );
                        ChunkOutcome::Failed {
                            index: chunk.index,
                            reason,
                        }
                    }
                }
            })
            .collect()
    }

    /// The first `top_n` sentences of `text`. Fewer sentences than `top_n`
    /// is fine; all of them are returned.
    fn key_sentences(&self, text: &str, top_n: usize) -> Vec<String> {
        self.segmenter
            .sentences(text)
            .into_iter()
            .take(top_n)
            .collect()
    }
}

impl std::fmt::Debug for DocumentSummarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentSummarizer").finish_non_exhaustive()
    }
}

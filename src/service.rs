//! The request/response surface consumed by presentation layers.
//!
//! A web form, desktop window, or CLI all speak the same two types:
//! [`SummarizeRequest`] in, [`crate::Summary`] out (both serde-ready).
//! What the surface adds over calling [`crate::DocumentSummarizer`]
//! directly:
//!
//! - **The process-wide model handle.** The service owns
//!   `Option<DocumentSummarizer>`; when the model failed to load at
//!   startup, the surface stays up and answers every request with
//!   [`Error::ModelUnavailable`] instead of crashing the host.
//! - **Input validation and override resolution.** Request text must be
//!   non-empty after trim; unset tunables fall back to the service
//!   defaults.
//! - **A completion-callback form**, for callers that dispatch the
//!   pipeline off their interactive context. Which thread or task runs it
//!   is the caller's choice; this layer only guarantees the callback
//!   fires exactly once.

use serde::{Deserialize, Serialize};

use crate::summarize::{DocumentSummarizer, Summary, SummarizeOptions};
use crate::{Error, Result, WordBudget};

/// One summarization request, as submitted by a presentation layer.
///
/// Only `text` is required; every unset override falls back to the
/// service defaults (budget 1000 words, output 50..=150 tokens,
/// deterministic decoding, 3 key sentences).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// The document text. Must be non-empty after trimming.
    pub text: String,
    /// Override for the per-chunk word budget.
    #[serde(default)]
    pub word_budget: Option<usize>,
    /// Override for the model's maximum output length.
    #[serde(default)]
    pub max_length: Option<usize>,
    /// Override for the model's minimum output length.
    #[serde(default)]
    pub min_length: Option<usize>,
    /// Override for the number of key sentences.
    #[serde(default)]
    pub top_n: Option<usize>,
}

impl SummarizeRequest {
    /// A request for `text` with no overrides.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            word_budget: None,
            max_length: None,
            min_length: None,
            top_n: None,
        }
    }
}

/// The summarization entry point a host process keeps for its lifetime.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use gist::{
///     DocumentSummarizer, ModelConfig, ModelError, SummarizeRequest, SummaryModel,
///     SummaryOutput, SummaryService,
/// };
///
/// struct Echo;
/// impl SummaryModel for Echo {
///     fn summarize(&self, chunk: &str, _: &ModelConfig) -> Result<SummaryOutput, ModelError> {
///         Ok(SummaryOutput::Text(chunk.to_string()))
///     }
/// }
///
/// let service = SummaryService::new(DocumentSummarizer::new(Arc::new(Echo)));
/// let summary = service.handle(&SummarizeRequest::new("Short input.")).unwrap();
/// assert_eq!(summary.text, "Short input.");
/// ```
pub struct SummaryService {
    summarizer: Option<DocumentSummarizer>,
    defaults: SummarizeOptions,
}

impl SummaryService {
    /// A service backed by a loaded model.
    #[must_use]
    pub fn new(summarizer: DocumentSummarizer) -> Self {
        Self {
            summarizer: Some(summarizer),
            defaults: SummarizeOptions::default(),
        }
    }

    /// A service whose model failed to load. Every request is answered
    /// with [`Error::ModelUnavailable`].
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            summarizer: None,
            defaults: SummarizeOptions::default(),
        }
    }

    /// Replace the fallback options used for unset request fields.
    #[must_use]
    pub fn with_defaults(mut self, defaults: SummarizeOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Whether a model is loaded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.summarizer.is_some()
    }

    /// Handle one request synchronously.
    ///
    /// Exactly one of: a `Summary`, or a single descriptive error. Never a
    /// partial result.
    ///
    /// # Errors
    ///
    /// [`Error::ModelUnavailable`], [`Error::EmptyInput`],
    /// [`Error::Budget`] (bad override), or [`Error::EmptySummary`].
    pub fn handle(&self, request: &SummarizeRequest) -> Result<Summary> {
        let summarizer = self.summarizer.as_ref().ok_or(Error::ModelUnavailable)?;

        let text = request.text.trim();
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        let opts = self.resolve(request)?;
        summarizer.summarize(text, &opts)
    }

    /// Handle one request and deliver the result through `on_complete`.
    ///
    /// The callback is invoked exactly once, success or failure, from
    /// whichever execution context runs this call. Dispatching that
    /// context (thread pool, task queue) is the caller's concern.
    pub fn handle_with<F>(&self, request: &SummarizeRequest, on_complete: F)
    where
        F: FnOnce(Result<Summary>),
    {
        on_complete(self.handle(request));
    }

    /// Merge request overrides onto the service defaults.
    fn resolve(&self, request: &SummarizeRequest) -> Result<SummarizeOptions> {
        let mut opts = self.defaults;
        if let Some(max_words) = request.word_budget {
            opts.budget = WordBudget::new(max_words)?;
        }
        if let Some(max_length) = request.max_length {
            opts.model.max_length = max_length;
        }
        if let Some(min_length) = request.min_length {
            opts.model.min_length = min_length;
        }
        if let Some(top_n) = request.top_n {
            opts.top_n = top_n;
        }
        Ok(opts)
    }
}

impl std::fmt::Debug for SummaryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryService")
            .field("ready", &self.is_ready())
            .field("defaults", &self.defaults)
            .finish()
    }
}

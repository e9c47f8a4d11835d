//! The summarization model seam.
//!
//! The crate never talks to a concrete model. It talks to [`SummaryModel`],
//! and the binary wires in whatever backend it has: an in-process
//! transformer runtime, an HTTP inference server, a test double.
//!
//! ## Result Shapes
//!
//! Real backends disagree about what a summary *is*. The common HTTP
//! inference servers return a list of objects with a `summary_text` field;
//! simpler ones return a bare string; some return the object without the
//! list. Rather than shape-sniffing at call sites, the accepted shapes are
//! a closed enum, [`SummaryOutput`], and normalization to plain text
//! happens in exactly one place ([`SummaryOutput::into_text`]).
//!
//! JSON-speaking backends can deserialize a response body straight into the
//! contract:
//!
//! ```rust
//! use gist::SummaryOutput;
//!
//! let body = r#"[{"summary_text": "The gist of it."}]"#;
//! let output: SummaryOutput = serde_json::from_str(body).unwrap();
//! assert_eq!(output.into_text().unwrap(), "The gist of it.");
//! ```

use serde::{Deserialize, Serialize};

/// Decoding configuration passed to the model on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Maximum output length, in model tokens.
    pub max_length: usize,
    /// Minimum output length, in model tokens.
    pub min_length: usize,
    /// Use deterministic (greedy) decoding instead of sampling.
    pub deterministic: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            max_length: 150,
            min_length: 50,
            deterministic: true,
        }
    }
}

/// The bounded set of result shapes a backend may produce.
///
/// Anything outside these shapes is a backend bug and should be reported
/// as [`ModelError::Backend`] by the trait implementation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SummaryOutput {
    /// An object carrying the summary in a named field.
    Structured {
        /// The summary text.
        summary_text: String,
    },
    /// A bare string.
    Text(String),
    /// A list of either shape; only the first element counts.
    Batch(Vec<SummaryOutput>),
}

impl SummaryOutput {
    /// Normalize to the plain summary string.
    ///
    /// Lists take their first element; surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MalformedResponse`] when the shape carries no
    /// usable text (empty list, blank string).
    pub fn into_text(self) -> Result<String, ModelError> {
        match self {
            Self::Text(s) | Self::Structured { summary_text: s } => {
                let s = s.trim();
                if s.is_empty() {
                    Err(ModelError::MalformedResponse)
                } else {
                    Ok(s.to_string())
                }
            }
            Self::Batch(items) => items
                .into_iter()
                .next()
                .ok_or(ModelError::MalformedResponse)?
                .into_text(),
        }
    }
}

/// A failure summarizing one chunk.
///
/// Never fatal on its own: the pipeline records it and moves to the next
/// chunk. Only when *every* chunk fails does the request error out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The backend reported a failure.
    #[error("model backend error: {0}")]
    Backend(String),

    /// The backend answered, but the result shape carried no usable text.
    #[error("model returned a malformed response")]
    MalformedResponse,
}

/// A summarization capability with a bounded input window.
///
/// Implementations must be safe to share across threads; the pipeline
/// holds the handle behind an `Arc` and calls it once per chunk,
/// sequentially within a request. Statelessness per call is assumed:
/// nothing is cached or retried here.
pub trait SummaryModel: Send + Sync {
    /// Summarize a single chunk.
    ///
    /// # Errors
    ///
    /// Any per-chunk failure, from transport errors to malformed output.
    fn summarize(&self, chunk: &str, config: &ModelConfig) -> Result<SummaryOutput, ModelError>;
}

//! # gist
//!
//! Summarize documents of any length with a model that only accepts bounded
//! input.
//!
//! ## The Problem
//!
//! Summarization models have input limits. Documents don't. A 40-page report
//! fed to a model with a ~1k-word window either gets truncated (losing the
//! back half) or rejected outright.
//!
//! The obvious fix—split the text and summarize the pieces—hides three traps:
//!
//! - A sentence split mid-thought produces garbage summaries
//! - One failed piece shouldn't throw away the other nineteen
//! - Partial results must be stitched back **in order**, or the summary
//!   reads like a shuffled deck
//!
//! This crate owns that orchestration and nothing else. The model itself,
//! sentence segmentation, and PDF parsing are pluggable collaborators.
//!
//! ## The Pipeline
//!
//! ```text
//! raw text
//!    │  WordBudgetChunker: group sentences under a word budget,
//!    │  never splitting a sentence
//!    ▼
//! [chunk 0] [chunk 1] [chunk 2] ... [chunk n]
//!    │  one SummaryModel call per chunk, in order;
//!    │  a failed chunk is logged and skipped, not fatal
//!    ▼
//! [partial 0] [partial 2] ... [partial n]      <- partial 1 failed
//!    │  join survivors with single spaces
//!    ▼
//! final summary ──► first `top_n` sentences = key sentences
//! ```
//!
//! ## Chunking Rules
//!
//! Sentences are atomic. A chunk closes as soon as the *next* sentence would
//! push it past the budget; that sentence opens the next chunk. A sentence
//! that alone exceeds the budget still ships whole as its own chunk—the
//! model's input limit is the model's problem, losing text is ours.
//!
//! ```text
//! budget = 6 words
//!
//! "Sentence one is short. Sentence two is also short. Sentence three is short too."
//!      4 words                  5 words                    5 words
//!
//! chunk 0: "Sentence one is short."        (4 + 5 would exceed 6)
//! chunk 1: "Sentence two is also short."   (5 + 5 would exceed 6)
//! chunk 2: "Sentence three is short too."
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use gist::{
//!     DocumentSummarizer, ModelConfig, ModelError, SummarizeOptions, SummaryModel,
//!     SummaryOutput,
//! };
//!
//! // A stand-in model: echoes the first sentence of each chunk.
//! struct FirstSentence;
//!
//! impl SummaryModel for FirstSentence {
//!     fn summarize(&self, chunk: &str, _config: &ModelConfig) -> Result<SummaryOutput, ModelError> {
//!         let head = chunk.split('.').next().unwrap_or(chunk).trim();
//!         Ok(SummaryOutput::Text(format!("{head}.")))
//!     }
//! }
//!
//! let summarizer = DocumentSummarizer::new(Arc::new(FirstSentence));
//! let summary = summarizer
//!     .summarize(
//!         "Rust ships without a runtime. It compiles to native code. \
//!          Memory safety is checked at compile time. There is no garbage collector.",
//!         &SummarizeOptions::default(),
//!     )
//!     .unwrap();
//!
//! assert!(!summary.text.is_empty());
//! assert!(summary.key_sentences.len() <= 3);
//! ```
//!
//! ## Failure Semantics
//!
//! | Condition | Effect |
//! |-----------|--------|
//! | Model never loaded | [`Error::ModelUnavailable`], request fails |
//! | No sentences in input | [`Error::EmptyInput`], request fails |
//! | One chunk fails | logged via `tracing`, chunk omitted, job continues |
//! | Every chunk fails | [`Error::EmptySummary`], request fails |
//!
//! No retries anywhere: a failed request is resubmitted by the caller or
//! not at all.
//!
//! ## PDF Input (requires `pdf` feature)
//!
//! ```rust,ignore
//! let text = gist::extract_text(&pdf_bytes)?;
//! let summary = summarizer.summarize(&text, &SummarizeOptions::default())?;
//! ```

mod budget;
mod chunk;
mod error;
mod model;
mod segment;
mod service;
mod summarize;

#[cfg(feature = "pdf")]
mod extract;

pub use budget::{BudgetError, WordBudget};
pub use chunk::{Chunk, WordBudgetChunker};
pub use error::{Error, Result};
pub use model::{ModelConfig, ModelError, SummaryModel, SummaryOutput};
pub use segment::{word_count, Segmenter, UnicodeSegmenter};
pub use service::{SummarizeRequest, SummaryService};
pub use summarize::{ChunkOutcome, DocumentSummarizer, Summary, SummarizeOptions};

#[cfg(feature = "pdf")]
pub use extract::extract_text;

//! Word-budget chunking: group whole sentences under a word ceiling.
//!
//! ## The Algorithm
//!
//! Walk the sentences in order, keeping a buffer and a running word count:
//!
//! ```text
//! for each sentence:
//!     if buffer is non-empty and count + words(sentence) > budget:
//!         close buffer as a chunk        <- flush BEFORE exceeding
//!         open a new buffer
//!     append sentence, count += words(sentence)
//! flush the remaining buffer
//! ```
//!
//! The tie-break matters: the chunk closes *before* the budget is exceeded,
//! and the triggering sentence opens the next chunk. The alternative
//! (append, then check) produces chunks that routinely run over budget by
//! one sentence.
//!
//! ## Oversize Sentences
//!
//! A sentence whose own word count exceeds the budget is never split,
//! truncated, or dropped. It lands as the sole content of its own chunk:
//! the buffer flushes before it (if non-empty), and the very next sentence
//! triggers a flush after it.
//!
//! ## Guarantees
//!
//! - **Partition**: every sentence appears in exactly one chunk, and chunk
//!   order equals sentence order. Joining all chunks reproduces the
//!   sentence sequence exactly.
//! - **Budget**: a chunk of two or more sentences never exceeds the budget.
//! - **Determinism**: same text, same budget, same chunks.

use std::sync::Arc;

use crate::segment::{word_count, Segmenter, UnicodeSegmenter};
use crate::WordBudget;

/// A group of consecutive sentences bound for one model call.
///
/// `text` is the sentences joined by single spaces; `words` is its UAX #29
/// word count. A `words` value above the configured budget means the chunk
/// is a single oversize sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk text: member sentences joined by single spaces.
    pub text: String,
    /// Total word count of the member sentences.
    pub words: usize,
    /// Zero-based position of this chunk in the sequence.
    pub index: usize,
}

impl Chunk {
    /// Create a new chunk.
    #[must_use]
    pub fn new(text: impl Into<String>, words: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            words,
            index,
        }
    }

    /// The length of this chunk in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ index: {}, words: {}, len: {} }}",
            self.index,
            self.words,
            self.len()
        )
    }
}

/// Sentence-respecting chunker with a word budget per chunk.
///
/// ## Example
///
/// ```rust
/// use gist::{WordBudget, WordBudgetChunker};
///
/// let chunker = WordBudgetChunker::new(WordBudget::new(6).unwrap());
/// let chunks = chunker.split(
///     "Sentence one is short. Sentence two is also short. Sentence three is short too.",
/// );
///
/// // 4 + 5 words would exceed 6, so every sentence gets its own chunk.
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[0].text, "Sentence one is short.");
/// assert_eq!(chunks[1].text, "Sentence two is also short.");
/// ```
pub struct WordBudgetChunker {
    budget: WordBudget,
    segmenter: Arc<dyn Segmenter>,
}

impl WordBudgetChunker {
    /// Create a chunker with the given budget and the default UAX #29
    /// segmenter.
    #[must_use]
    pub fn new(budget: WordBudget) -> Self {
        Self {
            budget,
            segmenter: Arc::new(UnicodeSegmenter),
        }
    }

    /// Replace the sentence segmenter.
    #[must_use]
    pub fn with_segmenter(mut self, segmenter: Arc<dyn Segmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// The configured word budget.
    #[must_use]
    pub const fn budget(&self) -> WordBudget {
        self.budget
    }

    /// Split `text` into ordered, sentence-aligned chunks.
    ///
    /// Returns an empty vec when `text` contains no sentences. Pure: no
    /// side effects, deterministic for a given `(text, budget)`.
    pub fn split(&self, text: &str) -> Vec<Chunk> {
        let sentences = self.segmenter.sentences(text);
        if sentences.is_empty() {
            return vec![];
        }

        let mut chunks = Vec::new();
        let mut buffer: Vec<String> = Vec::new();
        let mut count = 0usize;

        for sentence in sentences {
            let words = word_count(&sentence);

            if !buffer.is_empty() && self.budget.would_overflow(count, words) {
                let index = chunks.len();
                chunks.push(Chunk::new(buffer.join(" "), count, index));
                buffer.clear();
                count = 0;
            }

            count += words;
            buffer.push(sentence);
        }

        if !buffer.is_empty() {
            let index = chunks.len();
            chunks.push(Chunk::new(buffer.join(" "), count, index));
        }

        chunks
    }

    /// Estimate the number of chunks for a given text length.
    ///
    /// Assumes ~6 bytes per word. May be approximate; useful for
    /// pre-allocation only.
    #[must_use]
    pub fn estimate_chunks(&self, text_len: usize) -> usize {
        let estimated_words = text_len / 6;
        (estimated_words / self.budget.max_words()).max(1)
    }
}

impl std::fmt::Debug for WordBudgetChunker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordBudgetChunker")
            .field("budget", &self.budget)
            .finish()
    }
}

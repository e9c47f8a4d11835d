//! Sentence segmentation.
//!
//! ## The Hard Part: Finding Sentences
//!
//! Sentence detection seems simple until you encounter:
//!
//! ```text
//! "Dr. Smith went to Washington D.C. on Jan. 15th."
//!     ^                          ^       ^
//!     Not a sentence end (abbreviation)
//! ```
//!
//! The default implementation uses Unicode Standard Annex #29 (UAX #29)
//! sentence segmentation, which handles most edge cases including
//! abbreviations (Dr., Mr., Inc.), decimal numbers (3.14159), ellipses,
//! and URLs.
//!
//! ## Why a Trait?
//!
//! Everything downstream—chunk boundaries, key-sentence extraction—is
//! defined in terms of "the sentences of this text". Language-specific
//! segmenters (or a fixed scripted one in tests) plug in behind
//! [`Segmenter`] without touching the pipeline.

use unicode_segmentation::UnicodeSegmentation;

/// A sentence segmenter.
///
/// Returns the sentences of `text` in document order, trimmed, with
/// whitespace-only fragments dropped. The pipeline treats each returned
/// sentence as atomic: it is grouped, never split.
pub trait Segmenter: Send + Sync {
    /// Split `text` into ordered sentences.
    fn sentences(&self, text: &str) -> Vec<String>;
}

/// UAX #29 sentence segmenter.
///
/// Language-aware enough for prose in most Latin-script languages without
/// carrying a trained model.
///
/// ## Example
///
/// ```rust
/// use gist::{Segmenter, UnicodeSegmenter};
///
/// let sentences = UnicodeSegmenter.sentences("Hello world. How are you?");
/// assert_eq!(sentences, vec!["Hello world.", "How are you?"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn sentences(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Count the words in `text` using UAX #29 word boundaries.
///
/// Punctuation and whitespace are not words; "don't" is one word, not two.
///
/// ```rust
/// assert_eq!(gist::word_count("Sentence one is short."), 4);
/// assert_eq!(gist::word_count(""), 0);
/// ```
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.unicode_words().count()
}

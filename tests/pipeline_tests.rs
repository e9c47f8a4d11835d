//! End-to-end tests for the summarization pipeline: per-chunk failure
//! recovery, ordered aggregation, key-sentence extraction, and the
//! request surface.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use gist::{
    DocumentSummarizer, Error, ModelConfig, ModelError, SummarizeOptions, SummarizeRequest,
    SummaryModel, SummaryOutput, SummaryService, WordBudget,
};

// =============================================================================
// Test Doubles
// =============================================================================

/// Scripted model: call `n` returns "Part n." unless `n` is listed in
/// `fail_on`, in which case that call reports a backend error.
struct Scripted {
    calls: AtomicUsize,
    fail_on: Vec<usize>,
}

impl Scripted {
    fn new(fail_on: &[usize]) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on: fail_on.to_vec(),
        }
    }
}

impl SummaryModel for Scripted {
    fn summarize(&self, _chunk: &str, _: &ModelConfig) -> Result<SummaryOutput, ModelError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on.contains(&n) {
            Err(ModelError::Backend(format!("call {n} refused")))
        } else {
            Ok(SummaryOutput::Text(format!("Part {n}.")))
        }
    }
}

/// Model that always answers with the same multi-sentence summary.
struct Canned(&'static str);

impl SummaryModel for Canned {
    fn summarize(&self, _: &str, _: &ModelConfig) -> Result<SummaryOutput, ModelError> {
        Ok(SummaryOutput::Text(self.0.to_string()))
    }
}

/// Three sentences of three words each: a budget of 3 yields three chunks.
const THREE_CHUNK_TEXT: &str = "One two three. Four five six. Seven eight nine.";

fn three_chunk_opts() -> SummarizeOptions {
    SummarizeOptions {
        budget: WordBudget::new(3).unwrap(),
        ..SummarizeOptions::default()
    }
}

// =============================================================================
// Graceful Degradation
// =============================================================================

#[test]
fn one_failed_chunk_of_three_degrades_gracefully() {
    let summarizer = DocumentSummarizer::new(Arc::new(Scripted::new(&[1])));
    let summary = summarizer
        .summarize(THREE_CHUNK_TEXT, &three_chunk_opts())
        .unwrap();

    // The two survivors, in original chunk order, nothing else.
    assert_eq!(summary.text, "Part 0. Part 2.");
    assert_eq!(summary.chunks, 3);
    assert_eq!(summary.failed, 1);
}

#[test]
fn first_and_last_chunk_failures_are_recovered_too() {
    let summarizer = DocumentSummarizer::new(Arc::new(Scripted::new(&[0, 2])));
    let summary = summarizer
        .summarize(THREE_CHUNK_TEXT, &three_chunk_opts())
        .unwrap();

    assert_eq!(summary.text, "Part 1.");
    assert_eq!(summary.failed, 2);
}

#[test]
fn all_chunks_failing_fails_the_request() {
    let summarizer = DocumentSummarizer::new(Arc::new(Scripted::new(&[0, 1, 2])));
    let result = summarizer.summarize(THREE_CHUNK_TEXT, &three_chunk_opts());

    assert!(matches!(result, Err(Error::EmptySummary)));
}

#[test]
fn no_failures_joins_every_partial() {
    let summarizer = DocumentSummarizer::new(Arc::new(Scripted::new(&[])));
    let summary = summarizer
        .summarize(THREE_CHUNK_TEXT, &three_chunk_opts())
        .unwrap();

    assert_eq!(summary.text, "Part 0. Part 1. Part 2.");
    assert_eq!(summary.failed, 0);
}

// =============================================================================
// Key Sentences
// =============================================================================

#[test]
fn key_sentences_are_the_leading_sentences_in_order() {
    let summarizer = DocumentSummarizer::new(Arc::new(Canned(
        "Alpha first. Beta second. Gamma third. Delta fourth.",
    )));
    let summary = summarizer
        .summarize("Anything at all.", &SummarizeOptions::default())
        .unwrap();

    assert_eq!(
        summary.key_sentences,
        vec!["Alpha first.", "Beta second.", "Gamma third."]
    );
}

#[test]
fn short_summary_returns_all_sentences_without_error() {
    let summarizer = DocumentSummarizer::new(Arc::new(Canned("Alpha first. Beta second.")));
    let summary = summarizer
        .summarize("Anything at all.", &SummarizeOptions::default())
        .unwrap();

    // top_n is 3, the summary has 2 sentences: both come back, no error.
    assert_eq!(summary.key_sentences.len(), 2);
}

#[test]
fn key_sentence_count_is_min_of_top_n_and_sentence_count() {
    for (top_n, expected) in [(1, 1), (2, 2), (3, 3), (4, 4), (9, 4)] {
        let summarizer = DocumentSummarizer::new(Arc::new(Canned(
            "Alpha first. Beta second. Gamma third. Delta fourth.",
        )));
        let opts = SummarizeOptions {
            top_n,
            ..SummarizeOptions::default()
        };
        let summary = summarizer.summarize("Anything at all.", &opts).unwrap();
        assert_eq!(summary.key_sentences.len(), expected, "top_n = {top_n}");
    }
}

// =============================================================================
// Request Surface
// =============================================================================

#[test]
fn service_round_trip_from_json_request() {
    let service = SummaryService::new(DocumentSummarizer::new(Arc::new(Scripted::new(&[]))));
    let request: SummarizeRequest = serde_json::from_str(
        r#"{"text": "One two three. Four five six.", "word_budget": 3, "top_n": 1}"#,
    )
    .unwrap();

    let summary = service.handle(&request).unwrap();
    assert_eq!(summary.text, "Part 0. Part 1.");
    assert_eq!(summary.key_sentences, vec!["Part 0."]);

    let body = serde_json::to_value(&summary).unwrap();
    assert_eq!(body["chunks"], 2);
    assert_eq!(body["failed"], 0);
}

#[test]
fn service_without_model_reports_unavailable_for_every_request() {
    let service = SummaryService::unavailable();
    for text in ["Some text.", "", "More text here."] {
        let result = service.handle(&SummarizeRequest::new(text));
        assert!(matches!(result, Err(Error::ModelUnavailable)));
    }
}

#[test]
fn error_messages_are_human_readable() {
    assert_eq!(
        Error::ModelUnavailable.to_string(),
        "no summarization model is loaded"
    );
    assert_eq!(
        Error::EmptyInput.to_string(),
        "input text is empty or contains no sentences"
    );
    assert_eq!(
        Error::EmptySummary.to_string(),
        "summarization produced no output: all chunks failed"
    );
}

// =============================================================================
// Determinism of the Whole Pipeline
// =============================================================================

#[test]
fn identical_requests_produce_identical_summaries() {
    let text = "A document about many things. It has several sentences. They vary in length \
                quite a bit. Summarization should not care.";

    let run = || {
        let summarizer = DocumentSummarizer::new(Arc::new(Scripted::new(&[])));
        let opts = SummarizeOptions {
            budget: WordBudget::new(8).unwrap(),
            ..SummarizeOptions::default()
        };
        summarizer.summarize(text, &opts).unwrap()
    };

    assert_eq!(run(), run());
}

//! PDF text extraction (requires the `pdf` feature).
//!
//! Best-effort by design: PDF text recovery is lossy, and unreadable pages
//! degrade to missing text rather than failing the document. The extracted
//! string feeds straight into the pipeline like typed input.

use crate::{Error, Result};

/// Extract the concatenated page text of a PDF.
///
/// # Errors
///
/// [`Error::Extraction`] when the document cannot be parsed at all. Partial
/// or empty text from individual unreadable pages is not an error; the
/// pipeline's own empty-input handling catches documents with no
/// recoverable text.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| Error::Extraction(e.to_string()))
}

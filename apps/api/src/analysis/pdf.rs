//! PDF → plain text.
//!
//! Pages are extracted in reading order and concatenated with no separator,
//! so the last line of one page can run into the first line of the next.
//! Downstream heuristics tolerate this.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::debug;

/// The payload could not be opened as a PDF. Fatal for the request, never retried.
#[derive(Debug, Error)]
pub enum DocumentParseError {
    #[error("PDF could not be parsed: {0}")]
    Malformed(String),

    #[error("PDF parser aborted on malformed input")]
    Aborted,
}

/// Extracts the text of every page, in page order.
///
/// A well-formed document with no extractable text returns `Ok("")`; only a
/// stream that cannot be parsed is an error. `pdf_extract` may panic on hostile
/// input, so the call is isolated with `catch_unwind`.
pub fn extract_text_from_pdf(document: &[u8]) -> Result<String, DocumentParseError> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(document)
    }));

    let pages = match result {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => return Err(DocumentParseError::Malformed(e.to_string())),
        Err(_) => return Err(DocumentParseError::Aborted),
    };

    debug!(pages = pages.len(), bytes = document.len(), "PDF text extracted");
    Ok(pages.concat())
}

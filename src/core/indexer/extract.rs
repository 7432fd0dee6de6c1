//! Document text extraction.
//!
//! Turns raw document bytes into plain text. PDFs go through
//! `pdf-extract`; plain text and markdown are decoded as UTF-8 with a
//! lossy fallback. Pages that yield no text simply contribute nothing,
//! so the result may be empty; deciding whether that is an error is
//! left to the ingestion pipeline.

use crate::core::error::{Result, StudyError};
use std::path::Path;

/// Document formats studymate can read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
    Markdown,
}

impl DocumentKind {
    /// Detect the document kind from a file name's extension
    pub fn from_filename(filename: &str) -> Result<Self> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "pdf" => Ok(Self::Pdf),
            "txt" | "text" => Ok(Self::PlainText),
            "md" | "markdown" => Ok(Self::Markdown),
            "" => Err(StudyError::UnsupportedDocument(format!(
                "'{filename}' has no file extension (expected .pdf, .txt or .md)"
            ))),
            other => Err(StudyError::UnsupportedDocument(format!(
                "'.{other}' files are not supported (expected .pdf, .txt or .md)"
            ))),
        }
    }
}

/// Extract text from document bytes based on the file name
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String> {
    match DocumentKind::from_filename(filename)? {
        DocumentKind::Pdf => extract_pdf(bytes),
        DocumentKind::PlainText | DocumentKind::Markdown => Ok(decode_utf8(bytes)),
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String> {
    // pdf-extract can panic on malformed content streams
    let text = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| StudyError::ExtractionFailed("PDF parser panicked".to_string()))?
        .map_err(|e| StudyError::ExtractionFailed(e.to_string()))?;

    // pdf-extract separates pages with form feeds
    let pages: Vec<&str> = text.split('\x0C').map(str::trim).collect();
    let non_empty = pages.iter().filter(|p| !p.is_empty()).count();
    tracing::debug!(
        "Extracted {} pages from PDF ({} with text)",
        pages.len(),
        non_empty
    );

    Ok(pages.join("\n\n"))
}

fn decode_utf8(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            tracing::warn!("Document is not valid UTF-8 ({}), decoding lossily", e);
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

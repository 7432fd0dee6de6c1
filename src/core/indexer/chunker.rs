//! Word-window text chunking.
//!
//! Splits extracted document text into fixed-size windows of
//! separator-delimited words (see [`is_separator`]). Consecutive windows share `overlap`
//! words so a passage straddling a boundary appears whole in at
//! least one chunk. Working on words (not bytes) keeps every chunk
//! boundary on a character boundary for any UTF-8 input.
//!
//! # Example
//!
//! ```
//! use studymate::core::indexer::Chunker;
//!
//! let chunker = Chunker::new(4, 1).unwrap();
//! let chunks = chunker.chunk_text("a b c d e f g");
//!
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].text, "a b c d");
//! assert_eq!(chunks[1].text, "d e f g");
//! ```

use crate::core::error::{Result, StudyError};
use crate::core::types::Chunk;

/// Overlapping word-window chunker.
#[derive(Debug, Clone)]
pub struct Chunker {
    /// Number of words per chunk
    chunk_size: usize,

    /// Number of words shared between consecutive chunks
    overlap: usize,
}

impl Chunker {
    /// Create a new chunker with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StudyError::ConfigError`] if `chunk_size` is 0 or if
    /// `overlap >= chunk_size` (the window would never advance).
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(StudyError::ConfigError(
                "chunk_size must be > 0".to_string(),
            ));
        }
        if overlap >= chunk_size {
            return Err(StudyError::ConfigError(format!(
                "overlap ({overlap}) must be < chunk_size ({chunk_size})"
            )));
        }

        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Get the chunk size in words.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Get the overlap in words.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Chunk text into overlapping word windows.
    ///
    /// Returns an empty vector when `text` contains no words. The
    /// window advances by `chunk_size - overlap` words and stops at
    /// the first window that reaches the end of the text, so the final
    /// chunk may be shorter than `chunk_size`.
    pub fn chunk_text(&self, text: &str) -> Vec<Chunk> {
        let words: Vec<&str> = words(text).collect();
        let n = words.len();

        if n == 0 {
            return Vec::new();
        }

        let step = self.chunk_size - self.overlap;
        let mut chunks = Vec::with_capacity(n / step + 1);
        let mut start = 0;

        loop {
            let end = (start + self.chunk_size).min(n);

            chunks.push(Chunk {
                text: words[start..end].join(" "),
                chunk_index: chunks.len(),
                start_word: start,
                end_word: end,
            });

            if end == n {
                break;
            }
            start += step;
        }

        chunks
    }
}

/// Word separator: Unicode whitespace plus the ASCII information
/// separators U+001C..=U+001F, which PDF extraction can emit between
/// words.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split text into words on [`is_separator`] runs.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|w| !w.is_empty())
}

//! Core data types for studymate.
//!
//! This module defines the data structures shared across the
//! ingestion, search and study layers: chunks, search results and
//! ingestion statistics.

use serde::{Deserialize, Serialize};

/// A single word-window chunk of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Space-joined words of the window
    pub text: String,

    /// Sequential chunk number within the document
    pub chunk_index: usize,

    /// Index of the first word (inclusive) in the document word sequence
    pub start_word: usize,

    /// Index of the last word (exclusive) in the document word sequence
    pub end_word: usize,
}

impl Chunk {
    /// Number of words in this chunk
    pub fn word_count(&self) -> usize {
        self.end_word - self.start_word
    }
}

/// Search result returned by a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Cosine similarity between query and chunk (0.0 - 1.0)
    pub score: f32,

    /// Chunk text content
    pub text: String,

    /// Chunk position within the document
    pub chunk_index: usize,
}

/// Ranked results for one query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub count: usize,
    pub duration_ms: u64,
}

/// Statistics from an ingestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestStats {
    /// Document label (usually the file name)
    pub source: String,

    /// Whitespace-separated words in the extracted text
    pub words: usize,

    /// Total chunks created
    pub chunks_created: usize,

    /// Distinct indexed terms
    pub vocabulary_size: usize,

    /// Ingestion duration in milliseconds
    pub duration_ms: u64,
}

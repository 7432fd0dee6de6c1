//! The in-memory store for one ingested document.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::error::{Result, StudyError};
use crate::core::indexer::{words, Chunker};
use crate::core::search::TermIndex;
use crate::core::types::{Chunk, SearchResult};

/// Raw text, ordered chunks and term index of one document.
///
/// A store is immutable once built. Re-ingesting produces a new store
/// which replaces the old one in the [`Session`](super::Session).
#[derive(Debug)]
pub struct Store {
    raw_text: String,
    chunks: Vec<Chunk>,
    index: TermIndex,
    source: String,
    ingested_at: DateTime<Utc>,
}

/// Summary of a store for status output
#[derive(Debug, Clone, Serialize)]
pub struct StoreInfo {
    pub source: String,
    pub chunks: usize,
    pub words: usize,
    pub characters: usize,
    pub vocabulary_size: usize,
    pub ingested_at: DateTime<Utc>,
}

impl Store {
    /// Chunk and index `text`.
    ///
    /// # Errors
    ///
    /// Returns [`StudyError::EmptyDocument`] when the text contains no
    /// words.
    pub fn build(text: impl Into<String>, source: impl Into<String>, chunker: &Chunker) -> Result<Self> {
        let raw_text = text.into();
        let source = source.into();

        if words(&raw_text).next().is_none() {
            return Err(StudyError::EmptyDocument(source));
        }

        let chunks = chunker.chunk_text(&raw_text);
        if chunks.is_empty() {
            return Err(StudyError::EmptyDocument(source));
        }

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        let index = TermIndex::build(&texts)?;

        Ok(Self {
            raw_text,
            chunks,
            index,
            source,
            ingested_at: Utc::now(),
        })
    }

    /// Top `k` chunks for `query`, highest score first.
    ///
    /// Never fails: a query with no known terms ranks every chunk at 0
    /// and returns the first `k` in document order.
    pub fn search(&self, query: &str, k: usize) -> Vec<SearchResult> {
        self.index
            .search(query, k)
            .into_iter()
            .filter_map(|(i, score)| {
                self.chunks.get(i).map(|chunk| SearchResult {
                    score,
                    text: chunk.text.clone(),
                    chunk_index: chunk.chunk_index,
                })
            })
            .collect()
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn index(&self) -> &TermIndex {
        &self.index
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ingested_at(&self) -> DateTime<Utc> {
        self.ingested_at
    }

    /// Words in the raw text
    pub fn word_count(&self) -> usize {
        words(&self.raw_text).count()
    }

    pub fn info(&self) -> StoreInfo {
        StoreInfo {
            source: self.source.clone(),
            chunks: self.chunks.len(),
            words: self.word_count(),
            characters: self.raw_text.chars().count(),
            vocabulary_size: self.index.vocabulary_size(),
            ingested_at: self.ingested_at,
        }
    }
}

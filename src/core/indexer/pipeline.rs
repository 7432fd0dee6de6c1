//! Ingestion pipeline orchestration.
//!
//! Coordinates the end-to-end ingestion workflow:
//! 1. Check the document size
//! 2. Extract text
//! 3. Chunk text
//! 4. Build the term index into a [`Store`]

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::core::error::{Result, StudyError};
use crate::core::indexer::{extract_text, Chunker};
use crate::core::storage::Store;
use crate::core::types::IngestStats;

/// Orchestrates the ingestion pipeline
#[derive(Debug, Clone)]
pub struct IngestionPipeline {
    chunker: Chunker,
    max_file_size_bytes: u64,
}

impl IngestionPipeline {
    /// Create a new ingestion pipeline
    ///
    /// # Arguments
    ///
    /// * `chunk_size` - Words per chunk
    /// * `overlap` - Words shared between consecutive chunks
    /// * `max_file_size_mb` - Maximum document size in megabytes
    ///
    /// # Errors
    ///
    /// Returns [`StudyError::ConfigError`] for invalid chunker settings.
    pub fn new(chunk_size: usize, overlap: usize, max_file_size_mb: usize) -> Result<Self> {
        let chunker = Chunker::new(chunk_size, overlap)?;

        Ok(Self {
            chunker,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        })
    }

    pub fn chunker(&self) -> &Chunker {
        &self.chunker
    }

    /// Chunk and index already-extracted text
    pub fn ingest_text(&self, text: &str, source: &str) -> Result<(Store, IngestStats)> {
        let start = Instant::now();

        let store = Store::build(text, source, &self.chunker)?;

        let stats = IngestStats {
            source: source.to_string(),
            words: store.word_count(),
            chunks_created: store.chunks().len(),
            vocabulary_size: store.index().vocabulary_size(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            "Ingested '{}': {} words, {} chunks, {} terms in {}ms",
            stats.source,
            stats.words,
            stats.chunks_created,
            stats.vocabulary_size,
            stats.duration_ms
        );

        Ok((store, stats))
    }

    /// Extract, chunk and index raw document bytes
    ///
    /// `filename` selects the extractor by extension and labels the
    /// resulting store.
    pub fn ingest_bytes(&self, bytes: &[u8], filename: &str) -> Result<(Store, IngestStats)> {
        self.check_size(bytes.len() as u64, filename)?;

        let start = Instant::now();
        let text = extract_text(bytes, filename)?;
        tracing::debug!(
            "Extracted {} characters from '{}' in {}ms",
            text.chars().count(),
            filename,
            start.elapsed().as_millis()
        );

        let (store, mut stats) = self.ingest_text(&text, filename)?;
        stats.duration_ms = start.elapsed().as_millis() as u64;

        Ok((store, stats))
    }

    /// Read a document from disk and ingest it
    pub fn ingest_file(&self, path: &Path) -> Result<(Store, IngestStats)> {
        let metadata = fs::metadata(path)?;
        let filename = source_label(path);
        self.check_size(metadata.len(), &filename)?;

        tracing::info!("Reading {:?}", path);
        let bytes = fs::read(path)?;

        self.ingest_bytes(&bytes, &filename)
    }

    /// Reject documents larger than the configured limit
    pub fn check_size(&self, len: u64, filename: &str) -> Result<()> {
        if len > self.max_file_size_bytes {
            return Err(StudyError::UnsupportedDocument(format!(
                "'{filename}' is {len} bytes, larger than the {} MB limit",
                self.max_file_size_bytes / (1024 * 1024)
            )));
        }
        Ok(())
    }
}

/// File name used to label a store (falls back to the full path)
pub fn source_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

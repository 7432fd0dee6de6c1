//! Unified service container for studymate
//!
//! Provides shared access to all core services.

use crate::core::assistant::PlanSettings;
use crate::core::config::Config;
use crate::core::error::{Result, StudyError};
use crate::core::indexer::{source_label, IngestionPipeline};
use crate::core::search::SearchService;
use crate::core::storage::{Session, Store};
use crate::core::types::IngestStats;
use std::path::Path;
use std::sync::Arc;

/// Unified services container
///
/// Every CLI command uses this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Current document store
    pub session: Arc<Session>,

    /// Search service for TF-IDF queries
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let search = Arc::new(SearchService::new(
            config.search.default_k,
            config.search.max_k,
            config.search.max_query_length,
        ));

        Self {
            session: Arc::new(Session::new()),
            search,
            config: Arc::new(config),
        }
    }

    /// Create an IngestionPipeline from the configured ingest settings
    pub fn create_pipeline(&self) -> Result<IngestionPipeline> {
        IngestionPipeline::new(
            self.config.ingest.chunk_size,
            self.config.ingest.overlap,
            self.config.ingest.max_file_size_mb,
        )
    }

    /// Load a document into the session.
    ///
    /// Extraction and indexing run on the blocking pool. If any step
    /// fails the previously loaded document stays current.
    pub async fn load_document(&self, path: &Path) -> Result<IngestStats> {
        let pipeline = self.create_pipeline()?;
        let filename = source_label(path);

        let len = tokio::fs::metadata(path).await?.len();
        pipeline.check_size(len, &filename)?;

        let bytes = tokio::fs::read(path).await?;
        let session = Arc::clone(&self.session);

        tokio::task::spawn_blocking(move || {
            let mut stats = None;
            session.ingest_with(|| {
                let (store, s) = pipeline.ingest_bytes(&bytes, &filename)?;
                stats = Some(s);
                Ok(store)
            })?;
            stats.ok_or_else(|| StudyError::EmptyDocument(filename))
        })
        .await
        .map_err(|e| StudyError::ExtractionFailed(format!("Ingestion task failed: {e}")))?
    }

    /// Current store, or an error when nothing is loaded
    pub fn require_store(&self) -> Result<Arc<Store>> {
        self.session
            .current()
            .ok_or_else(|| StudyError::EmptyDocument("no document loaded".to_string()))
    }

    /// Study plan settings from the `[study]` section
    pub fn plan_settings(&self) -> PlanSettings {
        PlanSettings {
            remainder: self.config.study.plan_remainder,
            fallback_days: self.config.study.fallback_plan_days,
        }
    }
}

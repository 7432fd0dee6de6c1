//! CLI test helpers
//!
//! Provides utilities for testing CLI commands including:
//! - Arc<Services> wrappers matching CLI execute() signatures
//! - Lecture files on disk for the file arguments

use std::sync::Arc;
use studymate::core::config::Config;
use studymate::core::services::Services;

/// Create test services wrapped in Arc (matching CLI execute() signatures)
pub fn create_cli_test_services() -> Arc<Services> {
    Arc::new(Services::new(Config::default()))
}

/// Create test services with a small chunk window so short lectures
/// produce several chunks
pub fn create_small_window_services() -> Arc<Services> {
    let mut config = Config::default();
    config.ingest.chunk_size = 30;
    config.ingest.overlap = 5;
    Arc::new(Services::new(config))
}

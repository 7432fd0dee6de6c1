// Test helper functions

use studymate::core::config::Config;
use studymate::core::indexer::Chunker;
use studymate::core::services::Services;
use studymate::core::storage::Store;
use studymate::core::types::IngestStats;

/// Create test services with default configuration
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services() -> Services {
    Services::new(Config::default())
}

/// Create test services with a custom chunk window
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services_with_window(chunk_size: usize, overlap: usize) -> Services {
    let mut config = Config::default();
    config.ingest.chunk_size = chunk_size;
    config.ingest.overlap = overlap;
    Services::new(config)
}

/// Build a store from `text` with the given chunk window
#[allow(dead_code)] // Used in integration tests
pub fn build_store(text: &str, chunk_size: usize, overlap: usize) -> Store {
    let chunker = Chunker::new(chunk_size, overlap).expect("Invalid chunk window");
    Store::build(text, "test.txt", &chunker).expect("Failed to build store")
}

/// Assert ingestion statistics are consistent
#[allow(dead_code)] // Used in integration tests
pub fn assert_valid_stats(stats: &IngestStats) {
    assert!(stats.words > 0, "Should have counted words");
    assert!(stats.chunks_created > 0, "Should have created chunks");
    assert!(
        stats.chunks_created <= stats.words,
        "Cannot have more chunks than words"
    );
    assert!(!stats.source.is_empty(), "Source label should be set");
}

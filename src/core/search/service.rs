//! Query validation and timing around store search.

use std::time::Instant;

use crate::core::error::{Result, StudyError};
use crate::core::storage::Store;
use crate::core::types::SearchResponse;

/// Search service applying result limits and query validation
#[derive(Debug, Clone)]
pub struct SearchService {
    default_k: usize,
    max_k: usize,
    max_query_length: usize,
}

impl SearchService {
    /// Create a new search service
    pub fn new(default_k: usize, max_k: usize, max_query_length: usize) -> Self {
        Self {
            default_k,
            max_k,
            max_query_length,
        }
    }

    /// Reject empty or oversized queries
    pub fn validate_query(&self, query: &str) -> Result<()> {
        if query.trim().is_empty() {
            return Err(StudyError::InvalidQuery(
                "Query cannot be empty".to_string(),
            ));
        }

        let len = query.chars().count();
        if len > self.max_query_length {
            return Err(StudyError::InvalidQuery(format!(
                "Query too long ({len} characters, max {})",
                self.max_query_length
            )));
        }

        Ok(())
    }

    /// Result limit for a request, capped at `max_k`
    pub fn effective_k(&self, k: Option<usize>) -> usize {
        k.unwrap_or(self.default_k).min(self.max_k)
    }

    /// Execute a search against `store`
    pub fn search(&self, store: &Store, query: &str, k: Option<usize>) -> Result<SearchResponse> {
        let start = Instant::now();

        self.validate_query(query)?;
        let k_limit = self.effective_k(k);

        let results = store.search(query, k_limit);

        let duration_ms = start.elapsed().as_millis() as u64;
        let count = results.len();

        tracing::debug!(
            "Search '{}' returned {} of {} chunks in {}ms",
            query,
            count,
            store.chunks().len(),
            duration_ms
        );

        Ok(SearchResponse {
            query: query.to_string(),
            results,
            count,
            duration_ms,
        })
    }
}

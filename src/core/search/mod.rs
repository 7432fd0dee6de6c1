//! Search module for TF-IDF retrieval.
//!
//! This module provides the term analyzer, the sparse TF-IDF index
//! with cosine ranking, and the search service used by the CLI.

mod analyzer;
mod service;
mod tfidf;

pub use analyzer::{analyze, is_stop_word, STOP_WORDS};
pub use service::SearchService;
pub use tfidf::{SparseVector, TermIndex};

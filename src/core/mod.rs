//! Core domain logic (front-end agnostic)
//!
//! This module contains all business logic that is independent
//! of how the user drives it (one-shot CLI commands or the
//! interactive session loop).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **indexer**: Text extraction, chunking and the ingestion pipeline
//! - **search**: TF-IDF index and cosine ranking
//! - **storage**: Document store and session handle
//! - **assistant**: Answers, summaries, quizzes and study plans
//! - **services**: Unified service container

pub mod assistant;
pub mod config;
pub mod error;
pub mod indexer;
pub mod search;
pub mod services;
pub mod storage;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, StudyError};
pub use services::Services;

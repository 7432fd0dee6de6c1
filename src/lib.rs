//! studymate - Offline Lecture Study Assistant
//!
//! Ingests a lecture document (PDF, text or markdown), builds a TF-IDF
//! index over overlapping word windows, and answers questions,
//! summaries, quizzes and study plans purely by retrieving and
//! re-presenting indexed passages. No generative model is involved.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (front-end agnostic)
//!   - config, error, types, xdg
//!   - indexer (extraction, chunking, ingestion pipeline)
//!   - search (TF-IDF index, cosine ranking)
//!   - storage (document store, session handle)
//!   - assistant (answer, summary, quiz, study plan)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output formatting, interactive session
//!
//! # Key Features
//!
//! - Word-window chunking (never splits a UTF-8 character)
//! - Sparse TF-IDF vectors with deterministic, tie-broken ranking
//! - One in-memory store per session, replaced atomically
//! - Human or JSON output

// Core domain logic
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{Result, StudyError};
pub use core::services::Services;
pub use core::storage::{Session, Store};
pub use core::types::*;

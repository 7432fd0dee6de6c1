//! Error types and error handling for studymate.
//!
//! This module defines the error types used throughout the
//! application. Presentation of errors (colors, exit codes) is
//! handled by the CLI adapter.

use thiserror::Error;

/// Result type alias for studymate operations
pub type Result<T> = std::result::Result<T, StudyError>;

/// Main error type for studymate
#[derive(Error, Debug)]
pub enum StudyError {
    #[error("No text could be extracted from the document: {0}")]
    EmptyDocument(String),

    #[error("Cannot build an index from zero chunks")]
    EmptyCorpus,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported document: {0}")]
    UnsupportedDocument(String),

    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl StudyError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if the error means there was nothing to index
    pub fn is_empty_input(&self) -> bool {
        matches!(self, StudyError::EmptyDocument(_) | StudyError::EmptyCorpus)
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            StudyError::InvalidQuery(_)
                | StudyError::InvalidArgument(_)
                | StudyError::UnsupportedDocument(_)
                | StudyError::ConfigError(_)
        )
    }
}

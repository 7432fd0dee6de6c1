//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod ask;
pub mod completions;
pub mod config;
pub mod info;
pub mod ingest;
pub mod plan;
pub mod quiz;
pub mod search;
pub mod session;
pub mod summarize;

// Re-export argument types for use in mod.rs
pub use ask::AskArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use info::InfoArgs;
pub use ingest::IngestArgs;
pub use plan::PlanArgs;
pub use quiz::QuizArgs;
pub use search::SearchArgs;
pub use session::SessionArgs;
pub use summarize::SummarizeArgs;

use crate::core::services::Services;
use crate::core::storage::Store;
use std::path::Path;
use std::sync::Arc;

/// Load `path` into the session and return its store
pub(crate) async fn load_store(
    services: &Services,
    path: &Path,
) -> Result<Arc<Store>, Box<dyn std::error::Error>> {
    services.load_document(path).await.map_err(|e| {
        format!("Could not load '{}': {}", path.display(), e)
    })?;
    Ok(services.require_store()?)
}

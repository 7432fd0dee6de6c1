//! Ingest command - load a document and report statistics

use crate::cli::output::{colors, format_duration, print_success};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the ingest command
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Lecture document (.pdf, .txt or .md)
    pub file: PathBuf,
}

/// Ingestion result response
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub source: String,
    pub path: String,
    pub words: usize,
    pub chunks_created: usize,
    pub vocabulary_size: usize,
    pub chunk_size: usize,
    pub overlap: usize,
    pub duration_secs: f64,
}

/// Execute the ingest command
pub async fn execute(
    args: IngestArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = services.load_document(&args.file).await.map_err(|e| {
        if e.is_empty_input() {
            format!(
                "{e}. The document may be scanned images or empty; \
                 try a text-based PDF or a .txt export."
            )
        } else {
            format!("Could not ingest '{}': {e}", args.file.display())
        }
    })?;

    let response = IngestResponse {
        source: stats.source,
        path: args.file.display().to_string(),
        words: stats.words,
        chunks_created: stats.chunks_created,
        vocabulary_size: stats.vocabulary_size,
        chunk_size: services.config.ingest.chunk_size,
        overlap: services.config.ingest.overlap,
        duration_secs: stats.duration_ms as f64 / 1000.0,
    };

    match format {
        OutputFormat::Human => {
            print_success(&format!("Ingested '{}'", response.source));
            println!(
                "  {} words -> {} chunks ({} words each, {} overlap)",
                colors::number(&response.words.to_string()),
                colors::number(&response.chunks_created.to_string()),
                response.chunk_size,
                response.overlap
            );
            println!(
                "  {} distinct terms indexed in {}",
                colors::number(&response.vocabulary_size.to_string()),
                format_duration(response.duration_secs)
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

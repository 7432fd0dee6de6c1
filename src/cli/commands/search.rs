//! Search command - rank document passages against a query

use crate::cli::commands::load_store;
use crate::cli::output::{colors, truncate_chars};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Lecture document (.pdf, .txt or .md)
    pub file: PathBuf,

    /// Search query
    pub query: String,

    /// Maximum number of results (defaults to search.default_k)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only show chunk numbers and scores (no content)
    #[arg(long)]
    pub chunks_only: bool,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub chunk_index: usize,
    pub score: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub source: String,
    pub total_results: usize,
    pub duration_ms: u64,
    pub results: Vec<SearchResultItem>,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate before paying for ingestion
    services.search.validate_query(&args.query)?;

    let store = load_store(services, &args.file).await?;
    let response = services.search.search(&store, &args.query, args.limit)?;

    let output = SearchResponseOutput {
        query: args.query.clone(),
        source: store.source().to_string(),
        total_results: response.count,
        duration_ms: response.duration_ms,
        results: response
            .results
            .iter()
            .enumerate()
            .map(|(i, r)| SearchResultItem {
                rank: i + 1,
                chunk_index: r.chunk_index,
                score: r.score,
                text: if args.chunks_only {
                    None
                } else {
                    Some(r.text.clone())
                },
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => print_human(&output),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn print_human(output: &SearchResponseOutput) {
    if output.results.is_empty() {
        println!(
            "No results found for '{}' in '{}'",
            colors::label(&output.query),
            colors::source(&output.source)
        );
        return;
    }

    println!(
        "Found {} result(s) in '{}':\n",
        colors::number(&output.total_results.to_string()),
        colors::source(&output.source)
    );

    for result in &output.results {
        println!(
            "[{}] chunk {} {}",
            colors::rank(&result.rank.to_string()),
            colors::number(&result.chunk_index.to_string()),
            colors::score(&format!("(score: {:.3})", result.score))
        );
        if let Some(text) = &result.text {
            println!("    {}", colors::dim(&truncate_chars(text, 300)));
            println!();
        }
    }
}

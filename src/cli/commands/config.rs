//! Config command - show current configuration

use crate::cli::output::print_header;
use crate::cli::OutputFormat;
use crate::core::config::{IngestConfig, SearchConfig, StudyConfig};
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the configuration as TOML (ready to save as config.toml)
    #[arg(long)]
    pub toml: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub config_file_exists: bool,
    pub ingest: IngestConfig,
    pub search: SearchConfig,
    pub study: StudyConfig,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    if args.toml {
        print!("{}", toml::to_string_pretty(config.as_ref())?);
        return Ok(());
    }

    let config_file = XdgDirs::new().config_file();
    let response = ConfigResponse {
        config_file_exists: config_file.exists(),
        config_file: config_file.to_string_lossy().into_owned(),
        ingest: config.ingest.clone(),
        search: config.search.clone(),
        study: config.study.clone(),
    };

    match format {
        OutputFormat::Human => {
            print_header("Configuration:");
            println!(
                "  config_file: {}{}",
                response.config_file,
                if response.config_file_exists {
                    ""
                } else {
                    " (not found, using defaults)"
                }
            );
            println!("  ingest:");
            println!("    chunk_size: {}", response.ingest.chunk_size);
            println!("    overlap: {}", response.ingest.overlap);
            println!("    max_file_size_mb: {}", response.ingest.max_file_size_mb);
            println!("  search:");
            println!("    default_k: {}", response.search.default_k);
            println!("    answer_k: {}", response.search.answer_k);
            println!("    max_k: {}", response.search.max_k);
            println!("    max_query_length: {}", response.search.max_query_length);
            println!("  study:");
            println!(
                "    quiz_questions: {} ({}-{})",
                response.study.quiz_questions,
                response.study.min_quiz_questions,
                response.study.max_quiz_questions
            );
            println!("    summary_detail: {}", response.study.summary_detail);
            println!("    fallback_plan_days: {}", response.study.fallback_plan_days);
            println!("    hours_per_day: {}", response.study.hours_per_day);
            println!("    plan_remainder: {:?}", response.study.plan_remainder);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

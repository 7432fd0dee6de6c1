//! Info command - show version and build information

use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Show detailed information
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub retrieval: String,
    pub formats: Vec<String>,
    pub config_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
}

/// Execute the info command
pub async fn execute(
    args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let xdg = crate::core::xdg::XdgDirs::new();
    let config_dir = xdg.config_dir.to_string_lossy().into_owned();

    let tools = args.detailed.then(|| {
        ["ask", "search", "summarize", "quiz", "plan"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    });

    let info = InfoResponse {
        name: "studymate".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        retrieval: format!(
            "TF-IDF cosine, {}-word chunks with {}-word overlap",
            services.config.ingest.chunk_size, services.config.ingest.overlap
        ),
        formats: vec!["pdf".to_string(), "txt".to_string(), "md".to_string()],
        config_dir,
        tools,
    };

    match format {
        OutputFormat::Human => {
            println!("studymate {}", info.version);
            println!("Retrieval: {}", info.retrieval);
            println!("Formats: {}", info.formats.join(", "));
            println!("Config: {}", info.config_dir);
            if let Some(tools) = &info.tools {
                println!("Tools: {}", tools.join(", "));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}

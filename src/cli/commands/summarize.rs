//! Summarize command - bullet summary of the lecture opening

use crate::cli::commands::load_store;
use crate::cli::output::{print_tool_output, ToolOutput};
use crate::cli::OutputFormat;
use crate::core::assistant::{summarize, SummaryDetail};
use crate::core::services::Services;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the summarize command
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Lecture document (.pdf, .txt or .md)
    pub file: PathBuf,

    /// Detail level: short, medium or long (defaults to study.summary_detail)
    #[arg(long, short = 'd')]
    pub detail: Option<SummaryDetail>,
}

/// Execute the summarize command
pub async fn execute(
    args: SummarizeArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let detail = args
        .detail
        .unwrap_or_else(|| SummaryDetail::from_label(&services.config.study.summary_detail));

    let store = load_store(services, &args.file).await?;

    let output = ToolOutput {
        source: store.source().to_string(),
        tool: format!("summary ({detail})"),
        text: summarize(&store, detail),
    };
    print_tool_output(&output, format)?;

    Ok(())
}

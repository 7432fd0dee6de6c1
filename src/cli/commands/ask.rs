//! Ask command - answer a question from the lecture

use crate::cli::commands::load_store;
use crate::cli::output::{print_tool_output, ToolOutput};
use crate::cli::OutputFormat;
use crate::core::assistant::answer_question;
use crate::core::services::Services;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the ask command
#[derive(Args, Debug)]
pub struct AskArgs {
    /// Lecture document (.pdf, .txt or .md)
    pub file: PathBuf,

    /// Question about the lecture
    pub question: String,
}

/// Execute the ask command
pub async fn execute(
    args: AskArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    services.search.validate_query(&args.question)?;

    let store = load_store(services, &args.file).await?;
    let text = answer_question(&store, &args.question, services.config.search.answer_k);

    let output = ToolOutput {
        source: store.source().to_string(),
        tool: "ask".to_string(),
        text,
    };
    print_tool_output(&output, format)?;

    Ok(())
}

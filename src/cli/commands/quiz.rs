//! Quiz command - practice questions from frequent keywords

use crate::cli::commands::load_store;
use crate::cli::output::{print_tool_output, print_warning, ToolOutput};
use crate::cli::OutputFormat;
use crate::core::assistant::{generate_quiz, Difficulty};
use crate::core::services::Services;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the quiz command
#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Lecture document (.pdf, .txt or .md)
    pub file: PathBuf,

    /// Number of questions (defaults to study.quiz_questions)
    #[arg(long, short = 'n')]
    pub questions: Option<usize>,

    /// Difficulty label: easy, medium or hard
    #[arg(long, default_value = "medium")]
    pub difficulty: Difficulty,
}

/// Execute the quiz command
pub async fn execute(
    args: QuizArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let requested = args.questions.unwrap_or(services.config.study.quiz_questions);
    let questions = services.config.clamp_quiz_questions(requested);
    if questions != requested {
        print_warning(&format!(
            "{requested} questions is out of range, generating {questions}"
        ));
    }

    let store = load_store(services, &args.file).await?;

    let output = ToolOutput {
        source: store.source().to_string(),
        tool: format!("quiz ({} {})", questions, args.difficulty),
        text: generate_quiz(&store, questions, args.difficulty),
    };
    print_tool_output(&output, format)?;

    Ok(())
}

//! CLI adapter for studymate
//!
//! Provides the command-line interface over the core study tools.
//! One-shot commands load a document, run one tool and exit; the
//! `session` command keeps a document loaded across many requests.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |     core/        |
//! |  (domain logic)  |
//! +--------+---------+
//!          |
//!          v
//! +------------------+
//! |      cli/        |
//! | (clap adapter)   |
//! +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// studymate - Offline Lecture Study Assistant
///
/// Load lecture slides or notes, then ask questions, get summaries,
/// practice quizzes and a study plan. Everything is retrieved from
/// the document itself with TF-IDF search; nothing leaves your machine.
#[derive(Parser, Debug)]
#[command(name = "studymate")]
#[command(version)]
#[command(about = "Offline lecture study assistant", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a document and report ingestion statistics
    Ingest(commands::IngestArgs),

    /// Rank document passages against a query
    Search(commands::SearchArgs),

    /// Answer a question with the most relevant passages
    Ask(commands::AskArgs),

    /// Summarize the opening of a lecture
    Summarize(commands::SummarizeArgs),

    /// Generate a practice quiz from frequent keywords
    Quiz(commands::QuizArgs),

    /// Build a day-by-day study plan until the exam
    Plan(commands::PlanArgs),

    /// Interactive session keeping one document loaded
    Session(commands::SessionArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Show version and build information
    #[command(name = "get-info")]
    GetInfo(commands::InfoArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  studymate completions bash > ~/.local/share/bash-completion/completions/studymate
    ///   zsh:   studymate completions zsh > ~/.zfunc/_studymate
    ///   fish:  studymate completions fish > ~/.config/fish/completions/studymate.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration
    let config = Config::load()?;
    config.log_config();

    // Create services
    let services = Arc::new(Services::new(config));

    // Execute command
    match cli.command {
        Commands::Ingest(args) => commands::ingest::execute(args, &services, cli.format).await,
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Ask(args) => commands::ask::execute(args, &services, cli.format).await,
        Commands::Summarize(args) => {
            commands::summarize::execute(args, &services, cli.format).await
        }
        Commands::Quiz(args) => commands::quiz::execute(args, &services, cli.format).await,
        Commands::Plan(args) => commands::plan::execute(args, &services, cli.format).await,
        Commands::Session(args) => commands::session::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::GetInfo(args) => commands::info::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}

//! studymate CLI - offline study assistant for lecture documents
//!
//! Load a lecture and ask questions, summarize, quiz yourself or plan
//! your revision. Everything is retrieved from the document itself.
//!
//! # Examples
//!
//! ```bash
//! # Ask a question
//! studymate ask slides.pdf "What is a page fault?"
//!
//! # Short summary
//! studymate summarize slides.pdf --detail short
//!
//! # Ten-question quiz
//! studymate quiz slides.pdf -n 10 --difficulty hard
//!
//! # Study plan until the exam
//! studymate plan slides.pdf --exam-date 2026-01-20 --weak-topics "scheduling"
//!
//! # Interactive session
//! studymate session slides.pdf
//! ```

use clap::Parser;
use studymate::cli::output::print_error;
use studymate::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(json: bool) {
    let filter = std::env::var("STUDYMATE_LOG")
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("studymate=warn"));

    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout stays clean for command output
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

//! Plan command - day-by-day study plan until the exam

use crate::cli::commands::load_store;
use crate::cli::output::{print_tool_output, ToolOutput};
use crate::cli::OutputFormat;
use crate::core::assistant::{generate_study_plan, Level, PlanRequest};
use crate::core::config::RemainderPolicy;
use crate::core::services::Services;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Lecture document (.pdf, .txt or .md)
    pub file: PathBuf,

    /// Exam date as YYYY-MM-DD (unparseable dates plan for a week)
    #[arg(long, default_value = "")]
    pub exam_date: String,

    /// Study hours available per day (defaults to study.hours_per_day)
    #[arg(long)]
    pub hours_per_day: Option<u32>,

    /// Your level with this course: beginner, intermediate or advanced
    #[arg(long, default_value = "intermediate")]
    pub level: Level,

    /// Topics to focus on, echoed in the plan
    #[arg(long, default_value = "")]
    pub weak_topics: String,

    /// Leftover chunks: drop, or last_day to add them to the final day
    #[arg(long)]
    pub remainder: Option<RemainderPolicy>,
}

/// Execute the plan command
pub async fn execute(
    args: PlanArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(services, &args.file).await?;

    let request = PlanRequest {
        exam_date: args.exam_date,
        hours_per_day: args
            .hours_per_day
            .unwrap_or(services.config.study.hours_per_day),
        level: args.level,
        weak_topics: args.weak_topics,
    };

    let mut settings = services.plan_settings();
    if let Some(remainder) = args.remainder {
        settings.remainder = remainder;
    }

    let today = Local::now().date_naive();
    let output = ToolOutput {
        source: store.source().to_string(),
        tool: "plan".to_string(),
        text: generate_study_plan(&store, &request, today, settings),
    };
    print_tool_output(&output, format)?;

    Ok(())
}

//! Session command - interactive study loop
//!
//! Keeps one document loaded while the user issues commands on stdin:
//!
//! ```text
//! load <file>        load or replace the document
//! ask <question>     answer from the most relevant passages
//! search <query>     ranked passages with scores
//! summary [detail]   short, medium or long summary
//! quiz [n]           practice quiz with n questions
//! plan [date] [weak topics...]
//! status | help | quit
//! ```
//!
//! A failed `load` keeps the previously loaded document.

use crate::cli::output::{colors, format_relative_time, truncate_chars};
use crate::cli::OutputFormat;
use crate::core::assistant::{
    answer_question, generate_quiz, generate_study_plan, summarize, Difficulty, Level,
    PlanRequest, SummaryDetail,
};
use crate::core::services::Services;
use chrono::Local;
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  load <file>                   load a lecture (.pdf, .txt, .md)
  ask <question>                answer from the most relevant passages
  search <query>                ranked passages with scores
  summary [short|medium|long]   summary of the lecture opening
  quiz [n]                      practice quiz with n questions
  plan [YYYY-MM-DD] [topics]    study plan until the exam
  status                        show the loaded document
  help                          show this help
  quit                          leave the session";

/// Arguments for the session command
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Document to load before the first prompt
    pub file: Option<PathBuf>,
}

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Load(PathBuf),
    Ask(String),
    Search(String),
    Summary(Option<String>),
    Quiz(Option<String>),
    Plan {
        exam_date: Option<String>,
        weak_topics: String,
    },
    Status,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((h, r)) => (h, r.trim()),
            None => (line, ""),
        };
        let arg = || (!rest.is_empty()).then(|| rest.to_string());

        match head.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "load" => Self::Load(PathBuf::from(rest)),
            "ask" => Self::Ask(rest.to_string()),
            "search" => Self::Search(rest.to_string()),
            "summary" | "summarize" => Self::Summary(arg()),
            "quiz" => Self::Quiz(arg()),
            "plan" => {
                let (date, topics) = match rest.split_once(char::is_whitespace) {
                    Some((d, t)) => (d, t.trim()),
                    None => (rest, ""),
                };
                Self::Plan {
                    exam_date: (!date.is_empty()).then(|| date.to_string()),
                    weak_topics: topics.to_string(),
                }
            }
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Response to one command in JSON mode
#[derive(Debug, Serialize)]
struct ReplResponse<'a> {
    command: &'a str,
    ok: bool,
    text: String,
}

/// Execute the session command on stdin/stdout
pub async fn execute(
    args: SessionArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let reader = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_loop(services, reader, &mut stdout, format, args.file).await
}

/// Read commands from `reader` until EOF or `quit`
pub async fn run_loop<R, W>(
    services: &Services,
    reader: R,
    out: &mut W,
    format: OutputFormat,
    initial: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if format == OutputFormat::Human {
        writeln!(
            out,
            "{} - type 'help' for commands, 'quit' to leave",
            colors::label("studymate session")
        )?;
    }

    if let Some(path) = initial {
        let result = handle(services, ReplCommand::Load(path)).await;
        emit(out, format, "load", result)?;
    }

    let mut lines = reader.lines();
    loop {
        if format == OutputFormat::Human {
            write!(out, "{} ", colors::dim("studymate>"))?;
            out.flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = ReplCommand::parse(&line);
        let name = line.split_whitespace().next().unwrap_or("").to_string();
        match command {
            ReplCommand::Empty => continue,
            ReplCommand::Quit => break,
            command => {
                tracing::debug!("Session command: {:?}", command);
                let result = handle(services, command).await;
                emit(out, format, &name, result)?;
            }
        }
    }

    if format == OutputFormat::Human {
        writeln!(out)?;
    }
    Ok(())
}

fn emit<W: Write>(
    out: &mut W,
    format: OutputFormat,
    command: &str,
    result: Result<String, String>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => match result {
            Ok(text) => writeln!(out, "{text}\n")?,
            Err(msg) => writeln!(out, "{}: {msg}\n", colors::error("Error"))?,
        },
        OutputFormat::Json => {
            let (ok, text) = match result {
                Ok(text) => (true, text),
                Err(msg) => (false, msg),
            };
            let response = ReplResponse { command, ok, text };
            writeln!(out, "{}", serde_json::to_string(&response)?)?;
        }
    }
    Ok(())
}

async fn handle(services: &Services, command: ReplCommand) -> Result<String, String> {
    if let ReplCommand::Load(path) = &command {
        if path.as_os_str().is_empty() {
            return Err("usage: load <file>".to_string());
        }
        return services
            .load_document(path)
            .await
            .map(|stats| {
                format!(
                    "Loaded '{}': {} words, {} chunks, {} terms",
                    stats.source, stats.words, stats.chunks_created, stats.vocabulary_size
                )
            })
            .map_err(|e| match services.session.current() {
                Some(previous) => format!("{e} (still using '{}')", previous.source()),
                None => e.to_string(),
            });
    }

    match &command {
        ReplCommand::Help => return Ok(HELP.to_string()),
        ReplCommand::Unknown(word) => {
            return Err(format!("unknown command '{word}', type 'help'"));
        }
        ReplCommand::Status => {
            return Ok(match services.session.current() {
                Some(store) => {
                    let info = store.info();
                    format!(
                        "Loaded '{}': {} words, {} chunks, {} terms, loaded {}",
                        info.source,
                        info.words,
                        info.chunks,
                        info.vocabulary_size,
                        format_relative_time(&info.ingested_at)
                    )
                }
                None => "No document loaded. Use 'load <file>'.".to_string(),
            });
        }
        _ => {}
    }

    let store = services
        .require_store()
        .map_err(|_| "no document loaded, use 'load <file>' first".to_string())?;
    let study = &services.config.study;

    match command {
        ReplCommand::Ask(question) => {
            services
                .search
                .validate_query(&question)
                .map_err(|e| e.to_string())?;
            Ok(answer_question(&store, &question, services.config.search.answer_k))
        }
        ReplCommand::Search(query) => {
            let response = services
                .search
                .search(&store, &query, None)
                .map_err(|e| e.to_string())?;
            let lines: Vec<String> = response
                .results
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    format!(
                        "[{}] chunk {} (score: {:.3}) {}",
                        i + 1,
                        r.chunk_index,
                        r.score,
                        truncate_chars(&r.text, 160)
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
        ReplCommand::Summary(detail) => {
            let detail = detail
                .as_deref()
                .map(SummaryDetail::from_label)
                .unwrap_or_else(|| SummaryDetail::from_label(&study.summary_detail));
            Ok(summarize(&store, detail))
        }
        ReplCommand::Quiz(n) => {
            let requested = match n {
                Some(raw) => raw
                    .parse::<usize>()
                    .map_err(|_| format!("'{raw}' is not a number of questions"))?,
                None => study.quiz_questions,
            };
            let questions = services.config.clamp_quiz_questions(requested);
            Ok(generate_quiz(&store, questions, Difficulty::default()))
        }
        ReplCommand::Plan {
            exam_date,
            weak_topics,
        } => {
            let request = PlanRequest {
                exam_date: exam_date.unwrap_or_default(),
                hours_per_day: study.hours_per_day,
                level: Level::default(),
                weak_topics,
            };
            let today = Local::now().date_naive();
            Ok(generate_study_plan(
                &store,
                &request,
                today,
                services.plan_settings(),
            ))
        }
        // Handled above
        ReplCommand::Load(_)
        | ReplCommand::Status
        | ReplCommand::Help
        | ReplCommand::Quit
        | ReplCommand::Empty
        | ReplCommand::Unknown(_) => Ok(String::new()),
    }
}

//! Tests for the interactive session loop
//!
//! The loop reads from any async buffered reader, so scripted input
//! from a byte slice stands in for stdin.

use crate::cli::test_helpers::{create_cli_test_services, create_small_window_services};
use crate::common::LectureFile;
use serde_json::Value;
use studymate::cli::commands::session::run_loop;
use studymate::cli::OutputFormat;

/// Run `script` through a JSON-mode session and parse each response line
async fn run_json(
    services: &studymate::core::services::Services,
    script: &str,
    initial: Option<std::path::PathBuf>,
) -> Vec<Value> {
    let mut out = Vec::new();
    run_loop(services, script.as_bytes(), &mut out, OutputFormat::Json, initial)
        .await
        .expect("session loop failed");

    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is one JSON response"))
        .collect()
}

#[tokio::test]
async fn test_session_load_and_ask() {
    let services = create_small_window_services();
    let lecture = LectureFile::os_lecture();
    let script = format!(
        "load {}\nask what is a page fault?\nsummary short\nquiz 3\nstatus\nquit\n",
        lecture.path.display()
    );

    let responses = run_json(&services, &script, None).await;
    assert_eq!(responses.len(), 5);
    assert!(responses.iter().all(|r| r["ok"] == true), "{responses:?}");

    assert_eq!(responses[0]["command"], "load");
    assert!(responses[0]["text"].as_str().unwrap().contains("lecture.txt"));
    assert!(responses[1]["text"]
        .as_str()
        .unwrap()
        .starts_with("🔍 *Answer from your slides*"));
    assert!(responses[2]["text"].as_str().unwrap().contains("(short detail)"));
    assert!(responses[3]["text"].as_str().unwrap().contains("\n3. "));
    assert!(responses[4]["text"].as_str().unwrap().starts_with("Loaded 'lecture.txt'"));
}

#[tokio::test]
async fn test_session_requires_document() {
    let services = create_cli_test_services();
    let responses = run_json(&services, "ask anything\nsummary\n", None).await;

    assert_eq!(responses.len(), 2);
    for r in &responses {
        assert_eq!(r["ok"], false);
        assert!(r["text"].as_str().unwrap().contains("no document loaded"));
    }
}

#[tokio::test]
async fn test_session_failed_load_keeps_document() {
    let services = create_cli_test_services();
    let lecture = LectureFile::os_lecture();
    let blank = lecture.add_file("blank.txt", "   ");
    let script = format!("load {}\nstatus\n", blank.display());

    let responses = run_json(&services, &script, Some(lecture.path.clone())).await;

    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["ok"], true);
    assert_eq!(responses[1]["ok"], false);
    assert!(responses[1]["text"]
        .as_str()
        .unwrap()
        .contains("still using 'lecture.txt'"));
    assert!(responses[2]["text"].as_str().unwrap().contains("lecture.txt"));
}

#[tokio::test]
async fn test_session_skips_blank_lines_and_reports_unknown() {
    let services = create_cli_test_services();
    let responses = run_json(&services, "\n   \nfrobnicate\nhelp\n", None).await;

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["ok"], false);
    assert!(responses[0]["text"].as_str().unwrap().contains("frobnicate"));
    assert!(responses[1]["text"].as_str().unwrap().contains("load <file>"));
}

#[tokio::test]
async fn test_session_stops_at_quit() {
    let services = create_cli_test_services();
    let responses = run_json(&services, "help\nquit\nhelp\n", None).await;
    assert_eq!(responses.len(), 1);
}

#[tokio::test]
async fn test_session_plan_and_search() {
    let services = create_small_window_services();
    let lecture = LectureFile::os_lecture();
    let responses = run_json(
        &services,
        "search deadlock\nplan 2000-01-01 paging\nquiz lots\n",
        Some(lecture.path.clone()),
    )
    .await;

    assert_eq!(responses.len(), 4);
    let search = responses[1]["text"].as_str().unwrap();
    assert!(search.starts_with("[1] chunk "));

    let plan = responses[2]["text"].as_str().unwrap();
    assert!(plan.contains("(1 day(s) left)"));
    assert!(plan.contains("weak topics: paging"));

    assert_eq!(responses[3]["ok"], false);
    assert!(responses[3]["text"].as_str().unwrap().contains("'lots'"));
}

#[tokio::test]
async fn test_session_human_output() {
    let services = create_cli_test_services();
    let lecture = LectureFile::os_lecture();

    let mut out = Vec::new();
    run_loop(
        &services,
        "summary\nquit\n".as_bytes(),
        &mut out,
        OutputFormat::Human,
        Some(lecture.path.clone()),
    )
    .await
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("studymate session"));
    assert!(text.contains("📝 *Summary generated from your slides"));
}

//! Day-by-day study plan over the lecture's chunks.
//!
//! Chunks are assigned to days in document order, `max(n / days, 1)`
//! per day. With [`RemainderPolicy::Drop`] chunks beyond
//! `days * per_day` are left out; with [`RemainderPolicy::LastDay`]
//! they are appended to the final day.

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::assistant::text::lead_sentence;
use crate::core::config::RemainderPolicy;
use crate::core::error::StudyError;
use crate::core::storage::Store;

/// Maximum characters of a chunk's lead shown per plan entry
pub const ENTRY_CHARS: usize = 120;

/// Days until the exam when the exam date cannot be parsed
pub const DEFAULT_FALLBACK_DAYS: u32 = 7;

const REVIEW_PLACEHOLDER: &str = "- Review previous material or do practice problems.";
const CLOSING_REVIEW: &str = "✅ Last day before exam: full review + solve practice questions.";
const CLOSING_TIP: &str = "💡 Tip: study in 25-30 min focused blocks with short breaks.";

/// Self-assessed course level (shown as a label)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl FromStr for Level {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(StudyError::InvalidArgument(format!(
                "unknown level '{other}' (expected beginner, intermediate or advanced)"
            ))),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        })
    }
}

/// User inputs for a study plan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanRequest {
    /// ISO date (`YYYY-MM-DD`, optionally with a `THH:MM[:SS]` time)
    pub exam_date: String,
    pub hours_per_day: u32,
    pub level: Level,
    /// Echoed verbatim when non-empty
    pub weak_topics: String,
}

/// Settings taken from the `[study]` config section
#[derive(Debug, Clone, Copy)]
pub struct PlanSettings {
    pub remainder: RemainderPolicy,
    pub fallback_days: u32,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            remainder: RemainderPolicy::default(),
            fallback_days: DEFAULT_FALLBACK_DAYS,
        }
    }
}

/// Parse an ISO exam date, ignoring any time component
pub fn parse_exam_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").map(|dt| dt.date()))
        .ok()
}

/// Exam date, or `today + fallback_days` when `raw` is not a date.
///
/// A fallback beyond chrono's date range is replaced by the default
/// one-week horizon.
pub fn resolve_exam_date(raw: &str, today: NaiveDate, fallback_days: u32) -> NaiveDate {
    parse_exam_date(raw).unwrap_or_else(|| {
        let fallback = today
            .checked_add_days(Days::new(u64::from(fallback_days)))
            .or_else(|| today.checked_add_days(Days::new(u64::from(DEFAULT_FALLBACK_DAYS))))
            .unwrap_or(today);
        tracing::warn!(
            "Could not parse exam date '{}', planning for {}",
            raw,
            fallback
        );
        fallback
    })
}

/// Whole days until the exam, at least 1
pub fn days_until(exam: NaiveDate, today: NaiveDate) -> usize {
    let days = (exam - today).num_days();
    usize::try_from(days).unwrap_or(0).max(1)
}

/// Chunk index ranges per day, in document order
pub fn partition_days(
    chunk_count: usize,
    days: usize,
    remainder: RemainderPolicy,
) -> Vec<std::ops::Range<usize>> {
    let days = days.max(1);
    let per_day = (chunk_count / days).max(1);

    let mut idx = 0;
    let mut ranges: Vec<std::ops::Range<usize>> = (0..days)
        .map(|_| {
            let start = idx;
            let end = (idx + per_day).min(chunk_count);
            idx = end;
            start..end
        })
        .collect();

    if remainder == RemainderPolicy::LastDay && idx < chunk_count {
        if let Some(last) = ranges.last_mut() {
            last.end = chunk_count;
        }
    }

    ranges
}

/// Markdown study plan from `today` until the exam
pub fn generate_study_plan(
    store: &Store,
    request: &PlanRequest,
    today: NaiveDate,
    settings: PlanSettings,
) -> String {
    let exam = resolve_exam_date(&request.exam_date, today, settings.fallback_days);
    let days_left = days_until(exam, today);
    let chunks = store.chunks();

    let mut lines = Vec::new();
    lines.push(format!(
        "📅 *Study plan* until **{}** ({} day(s) left) - about **{}h/day**, level: **{}**.",
        exam.format("%Y-%m-%d"),
        days_left,
        request.hours_per_day,
        request.level
    ));
    if !request.weak_topics.is_empty() {
        lines.push(format!(
            "⚠️ Focus extra on your weak topics: {}",
            request.weak_topics
        ));
    }
    lines.push(String::new());

    for (day, range) in partition_days(chunks.len(), days_left, settings.remainder)
        .into_iter()
        .enumerate()
    {
        let mut entries: Vec<String> = chunks[range]
            .iter()
            .map(|c| lead_sentence(&c.text, ENTRY_CHARS))
            .filter(|s| !s.is_empty())
            .map(|s| format!("- {s}"))
            .collect();
        if entries.is_empty() {
            entries.push(REVIEW_PLACEHOLDER.to_string());
        }

        lines.push(format!("**Day {}:**", day + 1));
        lines.extend(entries);
        lines.push(String::new());
    }

    lines.push(CLOSING_REVIEW.to_string());
    lines.push(CLOSING_TIP.to_string());

    lines.join("\n")
}

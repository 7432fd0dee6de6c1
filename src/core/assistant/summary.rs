//! Extractive lecture summary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::assistant::text::{first_sentences, split_sentences};
use crate::core::error::StudyError;
use crate::core::storage::Store;

/// How much of the lecture a summary covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryDetail {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryDetail {
    /// Character budget taken from the start of the document
    pub fn budget(self) -> usize {
        match self {
            Self::Short => 800,
            Self::Medium => 1500,
            Self::Long => 2500,
        }
    }

    /// Parse a label, falling back to [`SummaryDetail::Medium`]
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown summary detail '{}', using medium", label);
            Self::Medium
        })
    }
}

impl FromStr for SummaryDetail {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(StudyError::InvalidArgument(format!(
                "unknown summary detail '{other}' (expected short, medium or long)"
            ))),
        }
    }
}

impl fmt::Display for SummaryDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        })
    }
}

/// Leading sentences of the lecture within the detail budget, one
/// bullet per sentence
pub fn summary_bullets(store: &Store, detail: SummaryDetail) -> Vec<String> {
    let base = first_sentences(store.raw_text(), detail.budget());
    split_sentences(&base)
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Markdown summary of the lecture
pub fn summarize(store: &Store, detail: SummaryDetail) -> String {
    let lines: Vec<String> = summary_bullets(store, detail)
        .into_iter()
        .map(|b| format!("- {b}"))
        .collect();

    format!(
        "📝 *Summary generated from your slides ({detail} detail).*\n\n{}",
        lines.join("\n")
    )
}

//! Keyword-driven practice quiz.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::assistant::keywords::extract_keywords;
use crate::core::error::StudyError;
use crate::core::storage::Store;

pub const NO_KEYWORDS_MESSAGE: &str =
    "Could not generate a quiz because not enough text/keywords were found.";

/// Difficulty label shown on the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(StudyError::InvalidArgument(format!(
                "unknown difficulty '{other}' (expected easy, medium or hard)"
            ))),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        })
    }
}

/// Topic for each question: the i-th keyword, or a numbered
/// placeholder once keywords run out
pub fn quiz_topics(store: &Store, num_questions: usize) -> Vec<String> {
    let keywords = extract_keywords(store.raw_text(), (num_questions * 2).max(10));
    if keywords.is_empty() {
        return Vec::new();
    }

    (0..num_questions)
        .map(|i| {
            keywords
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("concept #{}", i + 1))
        })
        .collect()
}

/// Markdown quiz with `num_questions` open-ended questions
pub fn generate_quiz(store: &Store, num_questions: usize, difficulty: Difficulty) -> String {
    let topics = quiz_topics(store, num_questions);
    if topics.is_empty() {
        return NO_KEYWORDS_MESSAGE.to_string();
    }

    let questions: Vec<String> = topics
        .iter()
        .enumerate()
        .map(|(i, kw)| {
            format!(
                "{}. Explain the concept of **{kw}** in the context of this lecture.",
                i + 1
            )
        })
        .collect();

    format!(
        "🧠 *Practice quiz* ({difficulty} level)\n\n{}\n\n\
         _Answers depend on your own understanding; this quiz is meant for self-testing._",
        questions.join("\n")
    )
}

//! Retrieval-only question answering.

use crate::core::assistant::text::first_sentences;
use crate::core::storage::Store;

/// Per-passage character budget in an answer
pub const SNIPPET_CHARS: usize = 400;

pub const NO_MATCH_MESSAGE: &str =
    "I couldn't find anything in the slides related to your question.";

/// Answer `question` with the `k` most relevant passages of the lecture
pub fn answer_question(store: &Store, question: &str, k: usize) -> String {
    let hits = store.search(question, k);
    if hits.is_empty() {
        return NO_MATCH_MESSAGE.to_string();
    }

    let parts: Vec<String> = hits
        .iter()
        .enumerate()
        .map(|(i, hit)| format!("{}. {}", i + 1, first_sentences(&hit.text, SNIPPET_CHARS)))
        .collect();

    format!(
        "🔍 *Answer from your slides*\n\n\
         Here are the most relevant notes from your slides for this question:\n\n{}",
        parts.join("\n\n")
    )
}

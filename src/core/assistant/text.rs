//! Sentence helpers shared by the study tools.
//!
//! Character budgets count Unicode scalar values, not bytes.

use crate::core::indexer::is_separator;

/// Split text into sentences.
///
/// A sentence ends at `.`, `!` or `?` followed by a separator (see
/// [`is_separator`]); the separator run is dropped. Text without terminal punctuation is one
/// sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim_matches(is_separator);
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let end = i + c.len_utf8();
        let Some(&(_, next)) = chars.peek() else {
            break;
        };
        if !is_separator(next) {
            continue;
        }

        sentences.push(&text[start..end]);
        while let Some(&(j, ws)) = chars.peek() {
            if !is_separator(ws) {
                start = j;
                break;
            }
            chars.next();
        }
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

/// Leading whole sentences of `text` within `max_chars`.
///
/// Sentences are added while the running character count stays within
/// budget and joined with single spaces. The first sentence is always
/// kept, even when it alone exceeds the budget.
pub fn first_sentences(text: &str, max_chars: usize) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut total = 0;

    for sentence in split_sentences(text) {
        let len = sentence.chars().count();
        if total + len > max_chars && !out.is_empty() {
            break;
        }
        out.push(sentence);
        total += len;
    }

    out.join(" ")
}

/// Leading sentence(s) of `text`, hard-capped at `max_chars`.
///
/// When the first sentence is longer than the budget it is cut at the
/// last word boundary that fits and `...` is appended; the ellipsis
/// counts toward `max_chars`.
pub fn lead_sentence(text: &str, max_chars: usize) -> String {
    const ELLIPSIS: &str = "...";

    let lead = first_sentences(text, max_chars);
    if lead.chars().count() <= max_chars {
        return lead;
    }
    if max_chars <= ELLIPSIS.len() {
        return lead.chars().take(max_chars).collect();
    }

    let cut = lead
        .char_indices()
        .nth(max_chars - ELLIPSIS.len())
        .map(|(i, _)| i)
        .unwrap_or(lead.len());
    let head = &lead[..cut];
    let head = match head.rfind(is_separator) {
        Some(pos) if pos > 0 => &head[..pos],
        _ => head,
    };

    format!("{}{ELLIPSIS}", head.trim_end_matches(is_separator))
}

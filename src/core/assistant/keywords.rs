//! Frequency-based keyword extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]{4,}").expect("valid keyword regex"));

/// Frequent but uninformative words skipped as keywords
const BORING_WORDS: &[&str] = &[
    "this", "that", "these", "those", "have", "been", "which", "there", "where", "from", "with",
    "about", "other", "because",
];

/// Most frequent keywords of `text`, at most `max_words`.
///
/// Keywords are lowercase ASCII letter runs of four or more. Ordering
/// is by descending count; equal counts keep first-occurrence order.
pub fn extract_keywords(text: &str, max_words: usize) -> Vec<String> {
    let lowered = text.to_lowercase();

    // word -> (count, first occurrence)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, m) in WORD_RE.find_iter(&lowered).enumerate() {
        counts.entry(m.as_str()).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .filter(|(word, _)| !BORING_WORDS.contains(word))
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(max_words)
        .map(|(word, _, _)| word.to_string())
        .collect()
}

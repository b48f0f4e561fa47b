//! Frequency-based keyword extraction.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

use crate::lexicon::is_stopword;
use crate::types::KeywordEntry;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("valid token pattern"));

/// Tokens must be longer than this to count as keywords.
const MIN_TOKEN_LEN: usize = 2;

/// Lowercases `text`, strips punctuation and returns the countable tokens in
/// order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_WORD
        .replace_all(&lowered, " ")
        .split_whitespace()
        .filter(|token| token.len() > MIN_TOKEN_LEN && !is_stopword(token))
        .map(str::to_string)
        .collect()
}

/// Returns the `max_keywords` most frequent tokens in `text`.
///
/// Ties keep the order in which the tokens were first seen.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<KeywordEntry> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut entries: Vec<KeywordEntry> = counts
        .into_iter()
        .map(|(word, count)| KeywordEntry { word, count })
        .collect();

    // `sort_by` is stable, which is what preserves first-seen order on ties.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(max_keywords);
    entries
}

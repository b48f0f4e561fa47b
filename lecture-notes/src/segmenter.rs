//! Whitespace normalization and sentence segmentation.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::Sentence;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

// Terminal punctuation followed by whitespace. The split point sits right
// after the punctuation so it stays with the preceding sentence.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid boundary pattern"));

/// Collapses every whitespace run to a single space and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Number of words in `text` when split on single spaces.
pub fn word_count(text: &str) -> usize {
    text.split(' ').count()
}

/// Splits normalized text into sentences, dropping fragments of three words
/// or fewer.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // Terminal punctuation is ASCII, so one byte past the match start is a
        // char boundary.
        let end = boundary.start() + 1;
        sentences.extend(Sentence::new(&text[start..end]));
        start = boundary.end();
    }
    sentences.extend(Sentence::new(&text[start..]));

    sentences
}

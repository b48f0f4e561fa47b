//! Value types produced by the notes pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::segmenter::{normalize_whitespace, word_count};

/// Minimum number of words a sentence must exceed to survive segmentation.
pub const MIN_SENTENCE_WORDS: usize = 3;

/// A normalized sentence taken from lecture text.
///
/// Always holds more than [`MIN_SENTENCE_WORDS`] words; shorter fragments are
/// rejected at construction and never reach the section builders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sentence(String);

impl Sentence {
    /// Normalizes `text` into a sentence, or returns `None` if it is a fragment.
    pub fn new(text: impl AsRef<str>) -> Option<Self> {
        let normalized = normalize_whitespace(text.as_ref());
        if normalized.is_empty() || word_count(&normalized) <= MIN_SENTENCE_WORDS {
            return None;
        }
        Some(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.0)
    }

    /// Iterates the space-separated words of the sentence.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }

}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A keyword together with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub word: String,
    pub count: usize
}

/// A term mined from a copula sentence, with the text that defines it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub term: String,
    pub definition: String
}

/// Per-stage output caps for the pipeline.
///
/// `NotesLimits::default()` gives the stock behaviour; services may tighten
/// or widen individual caps through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesLimits {
    pub max_keywords: usize,
    pub max_summary_lines: usize,
    pub max_key_points: usize,
    pub max_definitions: usize,
    pub max_concepts: usize,
    pub max_exam_notes: usize,
    pub max_questions: usize
}

impl Default for NotesLimits {
    fn default() -> Self {
        Self {
            max_keywords: 10,
            max_summary_lines: 6,
            max_key_points: 8,
            max_definitions: 8,
            max_concepts: 6,
            max_exam_notes: 6,
            max_questions: 5
        }
    }
}

/// The structured notes generated for one piece of lecture text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesResult {
    pub topic: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub definitions: Vec<Definition>,
    pub keywords: Vec<KeywordEntry>,
    pub concepts: Vec<String>,
    pub exam_notes: Vec<String>,
    pub questions: Vec<String>,
    pub raw_sentence_count: usize
}

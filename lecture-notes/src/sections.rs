//! Section builders: summary, key points, concepts and exam notes.
//!
//! Every builder works on the segmented sentences, keeps original order and
//! caps its output. Builders never fail; thin input degrades to fallbacks.

use regex::Regex;
use std::sync::LazyLock;

use crate::lexicon::{BULLET, EMPTY_SUMMARY, EXAM_SIGNALS, KEY_POINT_SIGNALS};
use crate::types::Sentence;

/// Sentences with at least this many words are treated as concepts.
const MIN_CONCEPT_WORDS: usize = 10;

static KEY_POINT_PATTERN: LazyLock<Regex> = LazyLock::new(|| signal_pattern(KEY_POINT_SIGNALS));

static EXAM_PATTERN: LazyLock<Regex> = LazyLock::new(|| signal_pattern(EXAM_SIGNALS));

/// Case-insensitive alternation over a phrase table.
fn signal_pattern(phrases: &[&str]) -> Regex {
    let alternation = phrases
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){alternation}")).expect("valid signal pattern")
}

fn bullet(sentence: &Sentence) -> String {
    format!("{BULLET}{sentence}")
}

/// Sentences matching `pattern`, or all sentences when none match.
fn signalled<'a>(sentences: &'a [Sentence], pattern: &Regex) -> Vec<&'a Sentence> {
    let matching: Vec<&Sentence> = sentences
        .iter()
        .filter(|s| pattern.is_match(s.as_str()))
        .collect();

    if matching.is_empty() {
        sentences.iter().collect()
    } else {
        matching
    }
}

/// Samples up to `max_lines` evenly spaced sentences into a single paragraph.
///
/// With `max_lines` or fewer sentences every sentence is kept.
pub fn build_summary(sentences: &[Sentence], max_lines: usize) -> String {
    if sentences.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }

    let stride = (sentences.len() / max_lines.max(1)).max(1);
    sentences
        .iter()
        .step_by(stride)
        .take(max_lines)
        .map(Sentence::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bulleted sentences that carry a key-point signal phrase.
pub fn build_key_points(sentences: &[Sentence], max_points: usize) -> Vec<String> {
    signalled(sentences, &KEY_POINT_PATTERN)
        .into_iter()
        .take(max_points)
        .map(bullet)
        .collect()
}

/// Long sentences, which tend to carry an explanation rather than a remark.
pub fn build_concepts(sentences: &[Sentence], max_concepts: usize) -> Vec<String> {
    sentences
        .iter()
        .filter(|s| s.word_count() >= MIN_CONCEPT_WORDS)
        .take(max_concepts)
        .map(|s| s.as_str().to_string())
        .collect()
}

/// Bulleted sentences that look like exam material.
///
/// When there is nothing to draw from, a single reminder about `topic` is
/// returned instead.
pub fn build_exam_notes(sentences: &[Sentence], topic: &str, max_lines: usize) -> Vec<String> {
    let notes: Vec<String> = signalled(sentences, &EXAM_PATTERN)
        .into_iter()
        .take(max_lines)
        .map(bullet)
        .collect();

    if notes.is_empty() && !topic.is_empty() {
        return vec![format!(
            "{BULLET}Understand the basic concept of {topic}."
        )];
    }

    notes
}

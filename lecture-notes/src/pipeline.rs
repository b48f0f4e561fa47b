//! End-to-end notes generation.

use tracing::debug;

use crate::definitions::mine_definitions;
use crate::keywords::extract_keywords;
use crate::questions::generate_questions;
use crate::sections::{build_concepts, build_exam_notes, build_key_points, build_summary};
use crate::segmenter::{normalize_whitespace, split_sentences};
use crate::topic::detect_topic;
use crate::types::{NotesLimits, NotesResult};

/// Generates notes for `text` with the default [`NotesLimits`].
pub fn generate_notes(text: &str) -> NotesResult {
    generate_notes_with(text, &NotesLimits::default())
}

/// Generates notes for `text`, capping each section by `limits`.
///
/// The result depends only on the arguments; calling this concurrently from
/// many tasks is safe.
pub fn generate_notes_with(text: &str, limits: &NotesLimits) -> NotesResult {
    let cleaned = normalize_whitespace(text);
    let sentences = split_sentences(&cleaned);

    let topic = detect_topic(&cleaned, &sentences);
    let keywords = extract_keywords(&cleaned, limits.max_keywords);
    let summary = build_summary(&sentences, limits.max_summary_lines);
    let key_points = build_key_points(&sentences, limits.max_key_points);
    let concepts = build_concepts(&sentences, limits.max_concepts);
    let exam_notes = build_exam_notes(&sentences, &topic, limits.max_exam_notes);
    let definitions = mine_definitions(&sentences, limits.max_definitions);
    let questions = generate_questions(&definitions, &topic, &sentences, limits.max_questions);

    debug!(
        sentences = sentences.len(),
        keywords = keywords.len(),
        definitions = definitions.len(),
        questions = questions.len(),
        "Generated lecture notes"
    );

    NotesResult {
        topic,
        summary,
        key_points,
        definitions,
        keywords,
        concepts,
        exam_notes,
        questions,
        raw_sentence_count: sentences.len()
    }
}

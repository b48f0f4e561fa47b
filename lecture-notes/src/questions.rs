//! Practice question generation.

use crate::lexicon::GENERIC_QUESTIONS;
use crate::types::{Definition, Sentence};

/// Builds up to `max_questions` quiz questions.
///
/// Definitions come first ("What is ...?"), then one question about the
/// topic, then the generic fallbacks. `_sentences` is accepted so callers can
/// pass the full context; the current heuristics do not read it.
pub fn generate_questions(
    definitions: &[Definition],
    topic: &str,
    _sentences: &[Sentence],
    max_questions: usize
) -> Vec<String> {
    let mut questions: Vec<String> = definitions
        .iter()
        .take(max_questions)
        .map(|d| format!("Q: What is {}?", d.term))
        .collect();

    if questions.len() < max_questions && !topic.is_empty() {
        questions.push(format!(
            "Q: Explain the concept of {topic} in your own words."
        ));
    }

    questions.extend(GENERIC_QUESTIONS.iter().map(|q| (*q).to_string()));
    questions.truncate(max_questions);
    questions
}

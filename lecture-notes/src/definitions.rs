//! Definition mining from copula sentences ("X is Y", "X are Y",
//! "X refers to Y").
//!
//! Each sentence is tested against the connectors in the fixed precedence
//! `is`, `are`, `refers to`. Only the first connector that matches is
//! considered, even when another connector appears earlier in the text, and
//! a rejected candidate is not retried with the remaining connectors.

use regex::Regex;
use std::sync::LazyLock;

use crate::lexicon::{DEFINITION_CONNECTORS, DISCOURSE_MARKERS};
use crate::types::{Definition, Sentence};

/// Terms longer than this many words are treated as noise.
const MAX_TERM_WORDS: usize = 6;

/// Definitions must be longer than this many characters.
const MIN_DEFINITION_CHARS: usize = 5;

static COPULA_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DEFINITION_CONNECTORS
        .iter()
        .map(|connector| {
            let connector = connector
                .split(' ')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+");
            Regex::new(&format!(r"(?i)^(.+?)\s+{connector}\s+(.+)$"))
                .expect("valid copula pattern")
        })
        .collect()
});

static DISCOURSE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    let markers = DISCOURSE_MARKERS
        .iter()
        .map(|m| regex::escape(m))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)^(?:{markers})\s+")).expect("valid discourse marker pattern")
});

static LEADING_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s:;,\-–—]+").expect("valid separator pattern"));

/// Mines up to `max_definitions` term/definition pairs from `sentences`.
pub fn mine_definitions(sentences: &[Sentence], max_definitions: usize) -> Vec<Definition> {
    let mut definitions = Vec::new();

    for sentence in sentences {
        if definitions.len() >= max_definitions {
            break;
        }
        if let Some(definition) = match_definition(sentence.as_str()) {
            definitions.push(definition);
        }
    }

    definitions
}

/// Applies the copula patterns to a single sentence.
///
/// Returns `None` when no connector matches or when the first matching
/// connector produces a term or definition that fails the size checks.
pub fn match_definition(sentence: &str) -> Option<Definition> {
    let captures = COPULA_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(sentence))?;

    let raw_term = captures.get(1)?.as_str().trim();
    let raw_definition = captures.get(2)?.as_str();

    let term = DISCOURSE_PREFIX.replace(raw_term, "").trim().to_string();
    let definition = LEADING_SEPARATORS
        .replace(raw_definition, "")
        .trim()
        .to_string();

    let term_words = term.split_whitespace().count();
    if term.is_empty()
        || term_words > MAX_TERM_WORDS
        || definition.chars().count() <= MIN_DEFINITION_CHARS
    {
        return None;
    }

    Some(Definition { term, definition })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(text: &str) -> Sentence {
        Sentence::new(text).unwrap()
    }

    #[test]
    fn test_are_pattern() {
        let definition =
            match_definition("Operating systems are programs that manage hardware resources.")
                .unwrap();
        assert_eq!(definition, Definition {
            term: "Operating systems".to_string(),
            definition: "programs that manage hardware resources.".to_string()
        });
    }

    #[test]
    fn test_is_pattern() {
        let definition = match_definition(
            "Photosynthesis is the process by which plants convert light into energy."
        )
        .unwrap();
        assert_eq!(definition.term, "Photosynthesis");
        assert_eq!(
            definition.definition,
            "the process by which plants convert light into energy."
        );
    }

    #[test]
    fn test_refers_to_pattern() {
        let definition =
            match_definition("Latency refers to the delay before a transfer begins.").unwrap();
        assert_eq!(definition.term, "Latency");
        assert_eq!(definition.definition, "the delay before a transfer begins.");
    }

    #[test]
    fn test_leading_in_is_stripped_from_captured_term() {
        // The term runs up to the first " is ", and the alternation tries the
        // bare "in" marker first.
        let definition =
            match_definition("In this chapter, a process is a running instance of a program.")
                .unwrap();
        assert_eq!(definition.term, "this chapter, a process");
        assert_eq!(definition.definition, "a running instance of a program.");
    }

    #[test]
    fn test_here_we_marker_is_stripped() {
        let definition =
            match_definition("Here we hashing is a way to map keys onto buckets.").unwrap();
        assert_eq!(definition.term, "hashing");
    }

    #[test]
    fn test_term_stops_at_first_connector() {
        let definition =
            match_definition("A queue is a list that is ordered by arrival time.").unwrap();
        assert_eq!(definition.term, "A queue");
        assert_eq!(definition.definition, "a list that is ordered by arrival time.");
    }

    #[test]
    fn test_is_takes_precedence_over_earlier_are() {
        // "are" appears first in the text but "is" is tried first.
        let definition =
            match_definition("Trees are useful because a heap is a complete binary tree.").unwrap();
        assert_eq!(definition.term, "Trees are useful because a heap");
    }

    #[test]
    fn test_rejected_match_is_not_retried_with_other_connectors() {
        // Term before "is" has nine words, so the sentence yields nothing
        // even though "are" would give a short term.
        assert!(
            match_definition("Cells are small and the thing we studied today is complex biology.")
                .is_none()
        );
    }

    #[test]
    fn test_long_terms_rejected() {
        assert!(
            match_definition("The algorithm that we discussed in the previous lecture is slow.")
                .is_none()
        );
    }

    #[test]
    fn test_short_definitions_rejected() {
        assert!(match_definition("The main answer to everything is so.").is_none());
        assert!(match_definition("The final stored value is 42.").is_none());
    }

    #[test]
    fn test_leading_separators_removed_from_definition() {
        let definition = match_definition("Entropy is - a measure of disorder.").unwrap();
        assert_eq!(definition.definition, "a measure of disorder.");
    }

    #[test]
    fn test_case_insensitive_connectors() {
        let definition = match_definition("Mutex IS a mutual exclusion lock.").unwrap();
        assert_eq!(definition.term, "Mutex");
    }

    #[test]
    fn test_no_connector() {
        assert!(match_definition("Chlorophyll absorbs light very well.").is_none());
    }

    #[test]
    fn test_mine_respects_limit_and_order() {
        let sentences = vec![
            sentence("A stack is a last in first out structure."),
            sentence("Nothing to define in this sentence here."),
            sentence("Queues are first in first out structures."),
            sentence("Latency refers to the delay before transfer.")
        ];

        let all = mine_definitions(&sentences, 8);
        let terms: Vec<_> = all.iter().map(|d| d.term.as_str()).collect();
        assert_eq!(terms, vec!["A stack", "Queues", "Latency"]);

        let capped = mine_definitions(&sentences, 2);
        assert_eq!(capped.len(), 2);
        assert_eq!(capped[1].term, "Queues");

        assert!(mine_definitions(&sentences, 0).is_empty());
    }
}

//! Fixed word and phrase tables used by the heuristics.
//!
//! Everything language-specific lives here.

/// Common English function words ignored when counting keywords.
///
/// Tokens of two characters or fewer are dropped before this check, so only
/// longer function words need to be listed.
pub const STOPWORDS: &[&str] = &[
    "the", "and", "are", "was", "were", "for", "with", "that", "this", "these", "those", "from",
    "into", "onto", "there", "their", "they", "them", "then", "than", "which", "what", "when",
    "where", "who", "whom", "will", "would", "can", "could", "should", "has", "have", "had",
    "been", "being", "also", "about", "our", "you", "your", "its", "not", "but", "any", "all"
];

/// Phrases that mark a sentence as a key point.
pub const KEY_POINT_SIGNALS: &[&str] = &[
    "important",
    "key point",
    "main idea",
    "in summary",
    "in conclusion",
    "therefore",
    "definition",
    "types of",
    "steps",
    "note that"
];

/// Phrases that mark a sentence as likely exam material.
pub const EXAM_SIGNALS: &[&str] = &[
    "exam",
    "important",
    "remember",
    "must know",
    "frequently asked",
    "often asked",
    "definition",
    "difference between",
    "advantages",
    "disadvantages",
    "types of"
];

/// Leading discourse markers stripped from mined terms, in match order.
pub const DISCOURSE_MARKERS: &[&str] = &["in", "in this", "in an", "in the", "here we", "we"];

/// Copula connectors tried by the definition miner, in precedence order.
pub const DEFINITION_CONNECTORS: &[&str] = &["is", "are", "refers to"];

pub const BULLET: &str = "• ";

pub const FALLBACK_TOPIC: &str = "Lecture Topic";

pub const EMPTY_SUMMARY: &str = "Not enough content to generate a summary.";

/// Generic questions appended when definitions and topic run out.
pub const GENERIC_QUESTIONS: &[&str] = &[
    "Q: List any two key points discussed in this lecture.",
    "Q: Write short notes on any one topic from the lecture."
];

/// Returns `true` if `word` is in [`STOPWORDS`].
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_stopwords_are_lowercase_and_unique() {
        let unique: HashSet<_> = STOPWORDS.iter().collect();
        assert_eq!(unique.len(), STOPWORDS.len());
        for word in STOPWORDS {
            assert_eq!(*word, word.to_lowercase());
            assert!(word.len() > 2, "{word} would already be filtered by length");
        }
    }

    #[test]
    fn test_is_stopword() {
        assert!(is_stopword("the"));
        assert!(is_stopword("which"));
        assert!(!is_stopword("photosynthesis"));
    }

    #[test]
    fn test_connector_precedence() {
        assert_eq!(DEFINITION_CONNECTORS, &["is", "are", "refers to"]);
    }

    #[test]
    fn test_signal_tables_are_lowercase() {
        for phrase in KEY_POINT_SIGNALS.iter().chain(EXAM_SIGNALS) {
            assert_eq!(*phrase, phrase.to_lowercase());
        }
    }
}

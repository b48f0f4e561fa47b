//! Topic detection.

use crate::keywords::extract_keywords;
use crate::lexicon::FALLBACK_TOPIC;
use crate::types::Sentence;

/// Words taken from the first sentence when no keyword is available.
const TOPIC_PREVIEW_WORDS: usize = 6;

/// Picks a topic for the lecture: the top keyword, else the opening words of
/// the first sentence, else [`FALLBACK_TOPIC`].
pub fn detect_topic(text: &str, sentences: &[Sentence]) -> String {
    if let Some(top) = extract_keywords(text, 1).into_iter().next() {
        return top.word;
    }

    match sentences.first() {
        Some(first) => first
            .words()
            .take(TOPIC_PREVIEW_WORDS)
            .collect::<Vec<_>>()
            .join(" "),
        None => FALLBACK_TOPIC.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::split_sentences;

    #[test]
    fn test_top_keyword_wins() {
        let text = "Graphs have nodes. Graphs have edges between the nodes of graphs.";
        assert_eq!(detect_topic(text, &split_sentences(text)), "graphs");
    }

    #[test]
    fn test_falls_back_to_first_sentence_words() {
        // Every token is either short or a stopword.
        let text = "it is to be or not to be, as we all do it.";
        let sentences = split_sentences(text);
        assert_eq!(detect_topic(text, &sentences), "it is to be or not");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(detect_topic("", &[]), "Lecture Topic");
    }
}

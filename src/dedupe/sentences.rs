//! Sentence-level deduplication against a reference text.
//!
//! Strips from freshly generated text the sentences it restates from
//! elsewhere (typically the previous message or the scene summary).

use crate::dedupe::similarity::{LevenshteinOracle, SimilarityOracle};
use crate::sentence::{SentenceSplitter, UnicodeSplitter};

/// Removes from `line_a` every sentence already stated in `line_b`, using
/// the default oracle and splitter.
///
/// See [`dedupe_sentences_with`].
#[must_use]
pub fn dedupe_sentences(line_a: &str, line_b: &str, threshold: u32, split_on_comma: bool) -> String {
    dedupe_sentences_with(
        &LevenshteinOracle,
        &UnicodeSplitter,
        line_a,
        line_b,
        threshold,
        split_on_comma,
    )
}

/// Removes from `line_a` every sentence similar to one in `line_b`.
///
/// Both texts are tokenized into sentences. With `split_on_comma`, every
/// `line_b` sentence containing a comma additionally contributes its
/// comma-delimited clauses as comparison candidates, so a clause recycled
/// into a new sentence is still caught. Kept sentences are rejoined with
/// single spaces.
///
/// Total: never errors; with no overlap the sentences of `line_a` come back
/// joined by single spaces.
#[must_use]
pub fn dedupe_sentences_with(
    oracle: &dyn SimilarityOracle,
    splitter: &dyn SentenceSplitter,
    line_a: &str,
    line_b: &str,
    threshold: u32,
    split_on_comma: bool,
) -> String {
    let line_a_sentences = splitter.split(line_a);
    let mut line_b_sentences = splitter.split(line_b);

    if split_on_comma {
        let with_comma: Vec<String> = line_b_sentences
            .iter()
            .filter(|sentence| sentence.contains(','))
            .cloned()
            .collect();

        for sentence in with_comma {
            line_b_sentences.extend(sentence.split(',').map(|clause| clause.trim().to_string()));
        }
    }

    let mut kept = Vec::new();

    for sentence in line_a_sentences {
        let similar_found = line_b_sentences.iter().any(|candidate| {
            let score = oracle.ratio(&sentence, candidate);
            if score >= threshold {
                tracing::debug!(score, sentence, candidate, "dropping duplicate sentence");
                return true;
            }
            false
        });

        if !similar_found {
            kept.push(sentence);
        }
    }

    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_sentence_removed() {
        let a = "The rain keeps falling on the old roof. She opens the door.";
        let b = "The rain keeps falling on the old roof.";
        assert_eq!(dedupe_sentences(a, b, 95, true), "She opens the door.");
    }

    #[test]
    fn test_no_overlap_unchanged() {
        let a = "She opens the door. He follows her inside.";
        let b = "The rain keeps falling on the old roof.";
        assert_eq!(
            dedupe_sentences(a, b, 95, true),
            "She opens the door. He follows her inside."
        );
    }

    #[test]
    fn test_comma_clause_candidates() {
        // "she smiled warmly" only appears as a clause of a longer sentence
        // in the reference text.
        let a = "She smiled warmly. The candle flickered out.";
        let b = "Crossing the room, she smiled warmly, and sat down.";
        let out = dedupe_sentences(a, b, 85, true);
        assert_eq!(out, "The candle flickered out.");
    }

    #[test]
    fn test_comma_split_disabled() {
        let a = "She smiled warmly. The candle flickered out.";
        let b = "Crossing the room, she smiled warmly, and sat down.";
        let out = dedupe_sentences(a, b, 85, false);
        assert_eq!(out, "She smiled warmly. The candle flickered out.");
    }

    #[test]
    fn test_everything_duplicated_gives_empty() {
        let a = "The rain keeps falling on the old roof.";
        assert_eq!(dedupe_sentences(a, a, 95, true), "");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(dedupe_sentences("", "whatever", 95, true), "");
        assert_eq!(
            dedupe_sentences("Something new here.", "", 95, true),
            "Something new here."
        );
    }
}

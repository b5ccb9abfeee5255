//! Sentence splitting.
//!
//! The deduplicator compares sentence-sized units, but which boundaries
//! count as sentence breaks is a swappable decision. [`SentenceSplitter`] is
//! the seam; [`UnicodeSplitter`] (UAX #29 sentence bounds) is the default
//! and [`PunctSplitter`] is a cheaper ASCII-punctuation heuristic.

use unicode_segmentation::UnicodeSegmentation;

/// Splits a block of text into an ordered sequence of sentence-like
/// substrings.
pub trait SentenceSplitter {
    /// Returns the sentences of `text`, trimmed, in order, empties removed.
    fn split(&self, text: &str) -> Vec<String>;
}

/// Unicode UAX #29 sentence-boundary splitter.
///
/// Locale-aware enough for generated prose, including abbreviation handling
/// for the common cases the segmentation rules cover.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSplitter;

impl SentenceSplitter for UnicodeSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

/// ASCII punctuation splitter: breaks after `.`, `!` or `?` followed by
/// whitespace or end of input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctSplitter;

impl SentenceSplitter for PunctSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let bytes = text.as_bytes();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < bytes.len() {
            if matches!(bytes[i], b'.' | b'!' | b'?')
                && (i + 1 >= bytes.len() || bytes[i + 1].is_ascii_whitespace())
            {
                let end = i + 1;
                if end > start {
                    let sentence = text[start..end].trim();
                    if !sentence.is_empty() {
                        sentences.push(sentence.to_string());
                    }
                }
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                start = i;
                continue;
            }
            i += 1;
        }

        if start < text.len() {
            let sentence = text[start..].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
        }

        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_splitter_basic() {
        let sentences = UnicodeSplitter.split("Hello world. How are you? I am fine!");
        assert_eq!(sentences, vec!["Hello world.", "How are you?", "I am fine!"]);
    }

    #[test]
    fn test_unicode_splitter_empty() {
        assert!(UnicodeSplitter.split("").is_empty());
        assert!(UnicodeSplitter.split("   ").is_empty());
    }

    #[test]
    fn test_unicode_splitter_no_terminal_punct() {
        let sentences = UnicodeSplitter.split("First sentence. Second part");
        assert_eq!(sentences, vec!["First sentence.", "Second part"]);
    }

    #[test]
    fn test_punct_splitter_basic() {
        let sentences = PunctSplitter.split("Hello world. How are you? I am fine!");
        assert_eq!(sentences, vec!["Hello world.", "How are you?", "I am fine!"]);
    }

    #[test]
    fn test_punct_splitter_decimal_not_split() {
        // A period not followed by whitespace is not a boundary.
        let sentences = PunctSplitter.split("Pi is 3.14 roughly. Yes.");
        assert_eq!(sentences, vec!["Pi is 3.14 roughly.", "Yes."]);
    }

    #[test]
    fn test_punct_splitter_trailing_text() {
        let sentences = PunctSplitter.split("Done. And then");
        assert_eq!(sentences, vec!["Done.", "And then"]);
    }
}

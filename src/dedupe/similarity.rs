//! The similarity oracle seam.
//!
//! Deduplication only needs a 0-100 "closeness" score between two strings;
//! any edit-distance-ratio implementation is substitutable. The default uses
//! normalized Levenshtein distance from `strsim`.

/// Scores the closeness of two strings on a 0-100 scale.
///
/// Implementations must be pure: no state, no I/O, safe to call from
/// concurrent tasks.
pub trait SimilarityOracle {
    /// Returns a closeness score, 0 (unrelated) to 100 (identical).
    fn ratio(&self, a: &str, b: &str) -> u32;
}

/// Default oracle: rounded normalized Levenshtein similarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinOracle;

impl SimilarityOracle for LevenshteinOracle {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "score is clamped to 0.0..=100.0 before the cast"
    )]
    fn ratio(&self, a: &str, b: &str) -> u32 {
        if a.is_empty() && b.is_empty() {
            return 100;
        }
        if a.is_empty() || b.is_empty() {
            return 0;
        }
        (strsim::normalized_levenshtein(a, b) * 100.0).round() as u32
    }
}

/// Result of probing a window of lines for a similar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarMatch {
    /// Whether any line met the threshold.
    pub found: bool,
    /// The highest score seen (the matching line's score when found).
    pub score: u32,
    /// The first line meeting the threshold, if any.
    pub line: Option<String>,
}

/// Checks whether `line` is similar to any line in `lines`.
///
/// Returns the first line scoring at or above `threshold`, or the highest
/// score seen when none does.
pub fn similarity_score(
    oracle: &dyn SimilarityOracle,
    line: &str,
    lines: &[&str],
    threshold: u32,
) -> SimilarMatch {
    let mut highest = 0;

    for existing in lines {
        let score = oracle.ratio(line, existing);
        highest = highest.max(score);
        if score >= threshold {
            return SimilarMatch {
                found: true,
                score,
                line: Some((*existing).to_string()),
            };
        }
    }

    SimilarMatch {
        found: false,
        score: highest,
        line: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_100() {
        assert_eq!(LevenshteinOracle.ratio("hello world", "hello world"), 100);
    }

    #[test]
    fn test_unrelated_strings_score_low() {
        assert!(LevenshteinOracle.ratio("abcdefgh", "12345678") < 30);
    }

    #[test]
    fn test_near_duplicates_score_high() {
        let a = "She walked slowly through the quiet garden.";
        let b = "She walked slowly through the quiet garden!";
        assert!(LevenshteinOracle.ratio(a, b) >= 95);
    }

    #[test]
    fn test_empty_string_handling() {
        assert_eq!(LevenshteinOracle.ratio("", ""), 100);
        assert_eq!(LevenshteinOracle.ratio("", "x"), 0);
        assert_eq!(LevenshteinOracle.ratio("x", ""), 0);
    }

    #[test]
    fn test_similarity_score_finds_match() {
        let lines = ["a completely different line", "hello world out there"];
        let result = similarity_score(&LevenshteinOracle, "hello world out there", &lines, 95);
        assert!(result.found);
        assert_eq!(result.score, 100);
        assert_eq!(result.line.as_deref(), Some("hello world out there"));
    }

    #[test]
    fn test_similarity_score_reports_highest_on_miss() {
        let lines = ["hello world", "hello worlds"];
        let result = similarity_score(&LevenshteinOracle, "hello word", &lines, 99);
        assert!(!result.found);
        assert!(result.score > 0);
        assert!(result.line.is_none());
    }
}

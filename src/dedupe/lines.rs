//! Line-level deduplication.
//!
//! Generation loops repeat whole lines; the scan runs from the most recent
//! line backward so later repetitions are preserved and earlier ones are
//! dropped - the newest occurrence is the likeliest intended continuation.

use crate::dedupe::similarity::{LevenshteinOracle, SimilarityOracle};

/// Removes near-duplicate lines from a string using the default oracle.
///
/// See [`dedupe_string_with`].
///
/// # Examples
///
/// ```
/// use proseclean::dedupe::dedupe_string;
///
/// let text = "A very long line of text over 32 chars\nA very long line of text over 32 chars";
/// assert_eq!(dedupe_string(text, 32, 95), "A very long line of text over 32 chars");
/// ```
#[must_use]
pub fn dedupe_string(s: &str, min_length: usize, threshold: u32) -> String {
    dedupe_string_with(&LevenshteinOracle, s, min_length, threshold)
}

/// Removes near-duplicate lines from a string, scanning from the last line
/// backward, with a caller-supplied similarity oracle.
///
/// A line is always retained verbatim when it is a code-fence delimiter
/// (triple backticks), when it sits inside a fence, or when its trimmed
/// length does not exceed `min_length`. Every other line is compared against
/// the already-retained lines that are outside fences; a score at or above
/// `threshold` drops it. Comparisons never cross a fence boundary.
///
/// Total: never errors; with no duplicates the content comes back unchanged.
#[must_use]
pub fn dedupe_string_with(
    oracle: &dyn SimilarityOracle,
    s: &str,
    min_length: usize,
    threshold: u32,
) -> String {
    let lines: Vec<&str> = s.split('\n').collect();
    let mut deduped: Vec<&str> = Vec::new();
    let mut in_codeblock = false;

    for line in lines.iter().rev() {
        let stripped = line.trim();

        if stripped.starts_with("```") {
            in_codeblock = !in_codeblock;
            deduped.push(line);
            continue;
        }

        if in_codeblock {
            deduped.push(line);
            continue;
        }

        if stripped.chars().count() > min_length {
            let mut similar_found = false;
            // Replay fence membership over the retained window so fenced
            // content is never used as a comparison baseline either.
            let mut existing_in_codeblock = false;

            for existing in &deduped {
                let existing_stripped = existing.trim();
                if existing_stripped.starts_with("```") {
                    existing_in_codeblock = !existing_in_codeblock;
                    continue;
                }
                if existing_in_codeblock {
                    continue;
                }

                let score = oracle.ratio(stripped, existing_stripped);
                if score >= threshold {
                    tracing::debug!(score, line = stripped, existing = existing_stripped, "dropping duplicate line");
                    similar_found = true;
                    break;
                }
            }

            if !similar_found {
                deduped.push(line);
            }
        } else {
            deduped.push(line);
        }
    }

    deduped.reverse();
    deduped.join("\n")
}

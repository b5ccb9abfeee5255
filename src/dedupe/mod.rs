//! Fuzzy deduplication of repeated generation output.
//!
//! Looping generators restate lines and sentences with small variations, so
//! exact matching is not enough: duplicates are detected with a 0-100
//! similarity score from a swappable [`SimilarityOracle`]. Two granularities
//! are provided:
//!
//! - [`dedupe_string`]: drops repeated lines, scanning from the most recent
//!   content backward, never comparing across code-fence boundaries.
//! - [`dedupe_sentences`]: drops sentences already stated in a reference
//!   text.
//!
//! All working state is local to each call; the operations are re-entrant
//! and never error.

pub mod lines;
pub mod sentences;
pub mod similarity;

pub use lines::{dedupe_string, dedupe_string_with};
pub use sentences::{dedupe_sentences, dedupe_sentences_with};
pub use similarity::{LevenshteinOracle, SimilarMatch, SimilarityOracle, similarity_score};

/// Default minimum trimmed length for a line to enter dedup comparison.
/// Shorter lines are kept verbatim; they are too short to risk
/// false-positive matching, and skipping them caps the comparison cost.
pub const DEFAULT_MIN_LENGTH: usize = 32;

/// Default similarity score (0-100) at which two lines or sentences count
/// as duplicates.
pub const DEFAULT_THRESHOLD: u32 = 95;

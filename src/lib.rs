//! # proseclean
//!
//! Normalization pipeline for raw language-model generation output.
//!
//! Generated text arrives with predictable defects: JSON wrapped in prose or
//! cut off mid-structure, dialogue with unbalanced `"` and `*` markers, and
//! lines or sentences restated with small variations. The modules here
//! repair each of these deterministically, without calling back into a
//! model.
//!
//! ## Features
//!
//! - **JSON recovery**: extract the first JSON value from mixed prose and
//!   repair common truncation damage
//! - **Dialogue formatting**: segment text into quoted speech and starred
//!   exposition, rebalancing uneven markers
//! - **Fuzzy deduplication**: drop near-duplicate lines and sentences using
//!   normalized edit distance, leaving code fences untouched
//! - **Cleanup transforms**: partial-sentence stripping, speaker-line
//!   filtering, whitespace normalization

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod clean;
pub mod cli;
pub mod dedupe;
pub mod dialogue;
pub mod error;
pub mod json;
pub mod sentence;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export JSON recovery
pub use json::{extract_json, fix_faulty_json, fix_unquoted_keys};

// Re-export dialogue formatting
pub use dialogue::{DialogFormat, Marker, ensure_dialog_format, ensure_dialog_line_format};

// Re-export deduplication
pub use dedupe::{
    DEFAULT_MIN_LENGTH, DEFAULT_THRESHOLD, LevenshteinOracle, SimilarMatch, SimilarityOracle,
    dedupe_sentences, dedupe_string, similarity_score,
};

// Re-export sentence splitting
pub use sentence::{PunctSplitter, SentenceSplitter, UnicodeSplitter};

// Re-export cleanup transforms
pub use clean::{clean_dialogue, clean_message, remove_trailing_markers, strip_partial_sentences};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};

//! Error types for proseclean operations.
//!
//! This module provides the error hierarchy using `thiserror` for all
//! normalization operations: JSON recovery, dialogue formatting and CLI
//! commands.

use thiserror::Error;

/// Result type alias for proseclean operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for normalization operations.
#[derive(Error, Debug)]
pub enum Error {
    /// JSON extraction/recovery errors.
    #[error("json error: {0}")]
    Json(#[from] JsonError),

    /// Dialogue formatting errors (logged-only, never surfaced by the
    /// block-level formatter).
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Errors raised by the JSON recovery extractor.
#[derive(Error, Debug)]
pub enum JsonError {
    /// No opening bracket exists in the input; there is nothing to extract.
    #[error("no JSON value found in output")]
    MalformedOutput,

    /// The extracted candidate failed to parse after the repair budget was
    /// exhausted.
    #[error("JSON parse error: {0}")]
    Parse(String),
}

/// Errors raised while formatting a single dialogue line.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The formatted line failed the balanced-marker check. The caller
    /// recovers by passing the original line through unmodified.
    #[error("unbalanced markers after formatting: {line}")]
    Degraded {
        /// The offending line, pre-formatting.
        line: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Failed to read command input.
    #[error("failed to read input: {path}: {reason}")]
    ReadFailed {
        /// Path to the input (or "stdin").
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),
}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(JsonError::Parse(err.to_string()))
    }
}

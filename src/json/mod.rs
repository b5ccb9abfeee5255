//! Recovery-oriented JSON extraction.
//!
//! Upstream generators frequently wrap structured responses in prose, stop
//! mid-value, or emit small formatting slips (missing commas, trailing
//! commas). This module extracts the first balanced JSON value from a string
//! and applies a bounded set of repairs before giving up:
//!
//! - **Extraction**: bracket-counting scan that finds the first balanced
//!   `{...}` or `[...]` prefix and parses it.
//! - **Repair**: regex fixes for common slips plus LIFO auto-closing of
//!   unterminated structures.

pub mod extract;
pub mod repair;

pub use extract::{BracketFrame, extract_json};
pub use repair::{fix_faulty_json, fix_unquoted_keys};

//! Dialogue segmentation and marker rebalancing.
//!
//! Generated roleplay text encases spoken dialogue in double quotes and
//! actions/thoughts in asterisks, and generators routinely drop one half of
//! a pair, glue markers together, or leave a span dangling at a truncation
//! point. This module classifies runs of each line into segments and
//! rebalances the markers so every span is properly encased.

pub mod format;
pub mod segment;

pub use format::{DialogFormat, ensure_dialog_format, ensure_dialog_line_format};
pub use segment::Marker;

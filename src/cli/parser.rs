//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::dedupe::{DEFAULT_MIN_LENGTH, DEFAULT_THRESHOLD};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// proseclean: normalize raw generation output.
///
/// Deterministic transforms for text produced by a language model: JSON
/// recovery, dialogue marker formatting, fuzzy deduplication and truncation
/// cleanup.
#[derive(Parser, Debug)]
#[command(name = "proseclean")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the first JSON value from mixed prose, repairing truncation.
    ExtractJson {
        /// Input file (stdin if not provided).
        file: Option<PathBuf>,
    },

    /// Rebalance quote and asterisk markers in dialogue text.
    FormatDialogue {
        /// Input file (stdin if not provided).
        file: Option<PathBuf>,

        /// Speaker name whose `Name:` prefix is detached before formatting
        /// and reattached after.
        #[arg(short, long)]
        speaker: Option<String>,

        /// Strip asterisk exposition markers from the result.
        #[arg(short, long)]
        plain: bool,
    },

    /// Remove near-duplicate lines, keeping the most recent occurrence.
    DedupeLines {
        /// Input file (stdin if not provided).
        file: Option<PathBuf>,

        /// Minimum trimmed line length to enter comparison.
        #[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
        min_length: usize,

        /// Similarity score (0-100) at which lines count as duplicates.
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: u32,
    },

    /// Remove sentences already stated in a reference text.
    DedupeSentences {
        /// Input file (stdin if not provided).
        file: Option<PathBuf>,

        /// Reference text to deduplicate against.
        #[arg(short, long)]
        against: PathBuf,

        /// Similarity score (0-100) at which sentences count as duplicates.
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: u32,

        /// Do not match against comma-delimited clauses of reference
        /// sentences.
        #[arg(long)]
        no_comma_clauses: bool,
    },

    /// Drop an unfinished trailing sentence and orphaned markers.
    StripPartial {
        /// Input file (stdin if not provided).
        file: Option<PathBuf>,
    },
}

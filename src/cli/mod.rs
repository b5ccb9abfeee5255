//! CLI layer for proseclean.
//!
//! Provides the command-line interface using clap, with one subcommand per
//! normalization transform. Input comes from a positional file or stdin.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};

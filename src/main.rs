//! Binary entry point for proseclean.
//!
//! Normalizes raw generation output: JSON recovery, dialogue formatting,
//! deduplication and truncation cleanup.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use proseclean::cli::output::{OutputFormat, format_error};
use proseclean::cli::{Cli, execute};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.format);

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("proseclean=debug")),
            )
            .with_writer(io::stderr)
            .init();
    }

    match execute(&cli) {
        Ok(output) => {
            if !output.is_empty() {
                // Handle broken pipe gracefully (e.g., when piped to `head` or `jq`)
                if let Err(e) = write!(io::stdout(), "{output}")
                    && e.kind() != io::ErrorKind::BrokenPipe
                {
                    eprintln!("Error writing to stdout: {e}");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let error_output = format_error(&e, format);
            match format {
                OutputFormat::Json => {
                    // JSON errors go to stdout for programmatic parsing
                    println!("{error_output}");
                }
                OutputFormat::Text => {
                    eprintln!("Error: {error_output}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

//! CLI command implementations.
//!
//! Contains the glue between parsed arguments and the library transforms:
//! read input, run the transform, format the result.

use crate::clean::strip_partial_sentences;
use crate::cli::output::{OutputFormat, format_extracted, format_text_result};
use crate::cli::parser::{Cli, Commands};
use crate::dedupe::{dedupe_sentences, dedupe_string};
use crate::dialogue::{DialogFormat, ensure_dialog_format};
use crate::error::{CommandError, Result};
use crate::json::extract_json;
use std::io::Read;
use std::path::Path;

/// Executes the CLI command.
///
/// # Errors
///
/// Returns an error if input cannot be read or the transform fails.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::ExtractJson { file } => cmd_extract_json(file.as_deref(), format),
        Commands::FormatDialogue {
            file,
            speaker,
            plain,
        } => cmd_format_dialogue(file.as_deref(), speaker.as_deref(), *plain, format),
        Commands::DedupeLines {
            file,
            min_length,
            threshold,
        } => cmd_dedupe_lines(file.as_deref(), *min_length, *threshold, format),
        Commands::DedupeSentences {
            file,
            against,
            threshold,
            no_comma_clauses,
        } => cmd_dedupe_sentences(file.as_deref(), against, *threshold, *no_comma_clauses, format),
        Commands::StripPartial { file } => cmd_strip_partial(file.as_deref(), format),
    }
}

/// Reads input from a file or, when none is given, from stdin.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            CommandError::ReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map_err(|e| {
                CommandError::ReadFailed {
                    path: "stdin".to_string(),
                    reason: e.to_string(),
                }
            })?;
            Ok(buf)
        }
    }
}

fn cmd_extract_json(file: Option<&Path>, format: OutputFormat) -> Result<String> {
    let input = read_input(file)?;
    let (matched, value) = extract_json(&input)?;
    Ok(format_extracted(&matched, &value, format))
}

fn cmd_format_dialogue(
    file: Option<&Path>,
    speaker: Option<&str>,
    plain: bool,
    format: OutputFormat,
) -> Result<String> {
    let input = read_input(file)?;
    let dialog_format = if plain {
        DialogFormat::Plain
    } else {
        DialogFormat::Markdown
    };
    let formatted = ensure_dialog_format(input.trim_end_matches('\n'), speaker, dialog_format);
    Ok(format_text_result(&formatted, format))
}

fn cmd_dedupe_lines(
    file: Option<&Path>,
    min_length: usize,
    threshold: u32,
    format: OutputFormat,
) -> Result<String> {
    validate_threshold(threshold)?;
    let input = read_input(file)?;
    let deduped = dedupe_string(input.trim_end_matches('\n'), min_length, threshold);
    Ok(format_text_result(&deduped, format))
}

fn cmd_dedupe_sentences(
    file: Option<&Path>,
    against: &Path,
    threshold: u32,
    no_comma_clauses: bool,
    format: OutputFormat,
) -> Result<String> {
    validate_threshold(threshold)?;
    let input = read_input(file)?;
    let reference = read_input(Some(against))?;
    let deduped = dedupe_sentences(input.trim(), reference.trim(), threshold, !no_comma_clauses);
    Ok(format_text_result(&deduped, format))
}

fn cmd_strip_partial(file: Option<&Path>, format: OutputFormat) -> Result<String> {
    let input = read_input(file)?;
    let stripped = strip_partial_sentences(input.trim_end_matches('\n'));
    Ok(format_text_result(&stripped, format))
}

fn validate_threshold(threshold: u32) -> Result<()> {
    if threshold > 100 {
        return Err(CommandError::InvalidArgument(format!(
            "--threshold must be 0-100, got {threshold}"
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn cli_for(command: Commands) -> Cli {
        Cli {
            verbose: false,
            format: "text".to_string(),
            command,
        }
    }

    fn temp_file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_extract_json_command() {
        let file = temp_file_with("Sure, here it is: {\"name\": \"Alice\"} hope that helps");
        let cli = cli_for(Commands::ExtractJson {
            file: Some(file.path().to_path_buf()),
        });
        let out = execute(&cli).unwrap();
        assert!(out.contains("\"name\": \"Alice\""));
    }

    #[test]
    fn test_extract_json_no_value_errors() {
        let file = temp_file_with("just prose, nothing else");
        let cli = cli_for(Commands::ExtractJson {
            file: Some(file.path().to_path_buf()),
        });
        assert!(execute(&cli).is_err());
    }

    #[test]
    fn test_format_dialogue_command() {
        let file = temp_file_with("He said \"hello there and then left\n");
        let cli = cli_for(Commands::FormatDialogue {
            file: Some(file.path().to_path_buf()),
            speaker: None,
            plain: false,
        });
        let out = execute(&cli).unwrap();
        assert_eq!(out, "*He said* \"hello there and then left\"\n");
    }

    #[test]
    fn test_dedupe_lines_command() {
        let line = "A very long line of text over 32 chars";
        let file = temp_file_with(&format!("{line}\n{line}\n"));
        let cli = cli_for(Commands::DedupeLines {
            file: Some(file.path().to_path_buf()),
            min_length: 32,
            threshold: 95,
        });
        let out = execute(&cli).unwrap();
        assert_eq!(out, format!("{line}\n"));
    }

    #[test]
    fn test_dedupe_lines_rejects_bad_threshold() {
        let file = temp_file_with("anything");
        let cli = cli_for(Commands::DedupeLines {
            file: Some(file.path().to_path_buf()),
            min_length: 32,
            threshold: 101,
        });
        assert!(execute(&cli).is_err());
    }

    #[test]
    fn test_dedupe_sentences_command() {
        let input = temp_file_with("The rain keeps falling on the old roof. She opens the door.");
        let reference = temp_file_with("The rain keeps falling on the old roof.");
        let cli = cli_for(Commands::DedupeSentences {
            file: Some(input.path().to_path_buf()),
            against: reference.path().to_path_buf(),
            threshold: 95,
            no_comma_clauses: false,
        });
        let out = execute(&cli).unwrap();
        assert_eq!(out, "She opens the door.\n");
    }

    #[test]
    fn test_strip_partial_command() {
        let file = temp_file_with("She waves. Then she turns and");
        let cli = cli_for(Commands::StripPartial {
            file: Some(file.path().to_path_buf()),
        });
        let out = execute(&cli).unwrap();
        assert_eq!(out, "She waves.\n");
    }

    #[test]
    fn test_missing_file_errors() {
        let cli = cli_for(Commands::StripPartial {
            file: Some(PathBuf::from("/nonexistent/input.txt")),
        });
        let err = execute(&cli).unwrap_err();
        assert!(err.to_string().contains("failed to read input"));
    }
}

//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::error::Error;
use serde::Serialize;
use serde_json::Value;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats an extracted JSON value.
///
/// Text output pretty-prints the value alone; JSON output wraps it together
/// with the exact matched source slice.
#[must_use]
pub fn format_extracted(matched: &str, value: &Value, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut pretty = to_pretty(value);
            if !pretty.ends_with('\n') {
                pretty.push('\n');
            }
            pretty
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Extracted<'a> {
                matched: &'a str,
                value: &'a Value,
            }
            let mut out = to_pretty(&Extracted { matched, value });
            out.push('\n');
            out
        }
    }
}

/// Formats plain transformed text.
///
/// Text output is the content itself; JSON output wraps it as
/// `{"output": ...}`.
#[must_use]
pub fn format_text_result(text: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut out = text.to_string();
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct TextOutput<'a> {
                output: &'a str,
            }
            let mut out = to_pretty(&TextOutput { output: text });
            out.push('\n');
            out
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            to_pretty(&ErrorOutput {
                error: error.to_string(),
            })
        }
    }
}

fn to_pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JsonError;
    use serde_json::json;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_format_extracted_text() {
        let value = json!({"a": 1});
        let out = format_extracted("{\"a\": 1}", &value, OutputFormat::Text);
        assert!(out.contains("\"a\": 1"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_format_extracted_json_includes_matched() {
        let value = json!({"a": 1});
        let out = format_extracted("{\"a\": 1}", &value, OutputFormat::Json);
        assert!(out.contains("\"matched\""));
        assert!(out.contains("\"value\""));
    }

    #[test]
    fn test_format_text_result() {
        assert_eq!(format_text_result("hello", OutputFormat::Text), "hello\n");

        let json = format_text_result("hello", OutputFormat::Json);
        assert!(json.contains("\"output\": \"hello\""));
    }

    #[test]
    fn test_format_error() {
        let err = Error::Json(JsonError::MalformedOutput);
        let text = format_error(&err, OutputFormat::Text);
        assert!(text.contains("no JSON value found"));

        let json = format_error(&err, OutputFormat::Json);
        assert!(json.contains("\"error\""));
    }
}

//! Balanced-prefix JSON extraction with auto-closing recovery.

use crate::error::JsonError;
use crate::json::repair::fix_faulty_json;
use serde_json::Value;

/// One unclosed opening bracket, in nesting order.
///
/// The extractor keeps a LIFO stack of these; the stack depth always equals
/// the open count minus the close count at the current scan position. Pops
/// are not type-checked against the closing character - any closer pops one
/// frame, matching the pinned extraction behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketFrame {
    /// An unclosed `{`.
    Brace,
    /// An unclosed `[`.
    Bracket,
}

impl BracketFrame {
    /// Returns the closing character for this frame.
    #[must_use]
    pub const fn closer(self) -> char {
        match self {
            Self::Brace => '}',
            Self::Bracket => ']',
        }
    }
}

/// Extracts the first balanced JSON value from the start of `text`.
///
/// Scans left to right from the first non-whitespace character, counting
/// opening and closing brackets. The first position where the counts balance
/// yields the candidate substring, which is parsed and returned together
/// with its parsed value. Characters after the balanced value are ignored,
/// so trailing prose is harmless.
///
/// If the string ends while brackets remain open, the candidate is repaired:
/// [`fix_faulty_json`] is applied first, then the missing closers are
/// synthesized from the remaining frames in LIFO order (last opened, first
/// closed).
///
/// Bracket counting is blind to string context: a closer inside a string
/// literal still decrements the counter. This is pinned behavior; inputs
/// relying on brackets inside strings before the value balances will fail to
/// parse and surface that error.
///
/// # Examples
///
/// ```
/// use proseclean::json::extract_json;
///
/// let (matched, value) = extract_json(r#"{"x": 1} trailing"#).unwrap();
/// assert_eq!(matched, r#"{"x": 1}"#);
/// assert_eq!(value["x"], 1);
///
/// let (_, value) = extract_json(r#"{"a": [1, 2"#).unwrap();
/// assert_eq!(value["a"][1], 2);
/// ```
///
/// # Errors
///
/// Returns [`JsonError::MalformedOutput`] when no opening bracket exists in
/// the input, and [`JsonError::Parse`] when the candidate (after the repair
/// budget is exhausted) is not valid JSON.
pub fn extract_json(text: &str) -> Result<(String, Value), JsonError> {
    let s = text.trim_start();
    let mut stack: Vec<BracketFrame> = Vec::new();
    let mut open_brackets = 0usize;
    let mut close_brackets = 0usize;
    let mut start: Option<usize> = None;

    tracing::debug!(input = s, "extract_json");

    for (i, c) in s.char_indices() {
        match c {
            '{' | '[' => {
                stack.push(if c == '{' {
                    BracketFrame::Brace
                } else {
                    BracketFrame::Bracket
                });
                open_brackets += 1;
                if start.is_none() {
                    start = Some(i);
                }
            }
            '}' | ']' => {
                stack.pop();
                close_brackets += 1;
                if open_brackets == close_brackets
                    && let Some(at) = start
                {
                    let candidate = &s[at..i + c.len_utf8()];
                    let value: Value = serde_json::from_str(candidate)?;
                    return Ok((candidate.to_string(), value));
                }
            }
            _ => {}
        }
    }

    let Some(at) = start else {
        return Err(JsonError::MalformedOutput);
    };

    // Unterminated value: repair formatting slips first, then auto-close
    // whatever frames are still open.
    let mut candidate = fix_faulty_json(&s[at..]);
    if let Ok(value) = serde_json::from_str(&candidate) {
        return Ok((candidate, value));
    }

    while let Some(frame) = stack.pop() {
        candidate.push(frame.closer());
    }

    let value: Value = serde_json::from_str(&candidate)?;
    Ok((candidate, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_extract_balanced_object() {
        let (matched, value) = extract_json(r#"{"x": 1} trailing"#).unwrap();
        assert_eq!(matched, r#"{"x": 1}"#);
        assert_eq!(value, json!({"x": 1}));
    }

    #[test]
    fn test_extract_with_leading_prose() {
        let (matched, value) = extract_json("Sure, here it is: {\"ok\": true}").unwrap();
        assert_eq!(matched, r#"{"ok": true}"#);
        assert_eq!(value, json!({"ok": true}));
    }

    #[test]
    fn test_extract_leading_whitespace() {
        let (matched, _) = extract_json("\n\n  [1, 2, 3]").unwrap();
        assert_eq!(matched, "[1, 2, 3]");
    }

    #[test]
    fn test_recovery_closes_brackets() {
        let (matched, value) = extract_json(r#"{"a": [1, 2"#).unwrap();
        assert_eq!(value, json!({"a": [1, 2]}));
        assert_eq!(matched, r#"{"a": [1, 2]}"#);
    }

    #[test]
    fn test_recovery_closes_deep_nesting() {
        let (_, value) = extract_json(r#"{"a": {"b": [1"#).unwrap();
        assert_eq!(value, json!({"a": {"b": [1]}}));
    }

    #[test]
    fn test_recovery_pops_closed_frames() {
        // The inner object is already closed; only the outer brace remains.
        let (_, value) = extract_json(r#"{"a": {"b": 1}"#).unwrap();
        assert_eq!(value, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_recovery_trailing_comma_before_closer() {
        // The repair pre-pass strips the comma, then the append fallback
        // closes the object.
        let (_, value) = extract_json(r#"{"a": [1, 2,]"#).unwrap();
        assert_eq!(value, json!({"a": [1, 2]}));
    }

    #[test]
    fn test_dangling_comma_surfaces_parse_error() {
        // `{"a": 1,` + synthesized `}` is still invalid; the repair budget
        // does not cover a comma with no closer after it.
        let err = extract_json(r#"{"a": 1,"#).unwrap_err();
        assert!(matches!(err, JsonError::Parse(_)));
    }

    #[test]
    fn test_no_bracket_is_malformed_output() {
        let err = extract_json("no json here").unwrap_err();
        assert!(matches!(err, JsonError::MalformedOutput));

        let err = extract_json("").unwrap_err();
        assert!(matches!(err, JsonError::MalformedOutput));
    }

    #[test]
    fn test_closers_only_is_malformed_output() {
        let err = extract_json("}}}").unwrap_err();
        assert!(matches!(err, JsonError::MalformedOutput));
    }

    #[test]
    fn test_bracket_in_string_surfaces_parse_error() {
        // The counter balances inside the string literal, producing an
        // unparseable candidate. Pinned: this is a hard error.
        let err = extract_json(r#"{"a": "}"}"#).unwrap_err();
        assert!(matches!(err, JsonError::Parse(_)));
    }

    #[test]
    fn test_array_value() {
        let (matched, value) = extract_json(r#"[{"a": 1}, {"b": 2}] and more"#).unwrap();
        assert_eq!(matched, r#"[{"a": 1}, {"b": 2}]"#);
        assert_eq!(value, json!([{"a": 1}, {"b": 2}]));
    }

    #[test]
    fn test_bracket_frame_closers() {
        assert_eq!(BracketFrame::Brace.closer(), '}');
        assert_eq!(BracketFrame::Bracket.closer(), ']');
    }

    proptest! {
        /// A serialized value survives extraction with arbitrary trailing
        /// prose appended.
        #[test]
        fn prop_round_trip_with_trailing_garbage(
            items in proptest::collection::vec(any::<i32>(), 0..8),
            garbage in "[ a-zA-Z.,!]{0,40}",
        ) {
            let serialized = serde_json::to_string(&items).unwrap();
            let (matched, value) = extract_json(&format!("{serialized}{garbage}")).unwrap();
            prop_assert_eq!(matched, serialized);
            prop_assert_eq!(value, json!(items));
        }
    }
}

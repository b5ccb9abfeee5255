//! Regex repairs for common JSON formatting slips.
//!
//! These are literal pattern substitutions pinned to the observed behavior of
//! the upstream generators they were written against. In particular the
//! `}` `[` case substitutes `},{` rather than `},[` - tests pin this
//! asymmetry, do not "fix" it.

use regex::Regex;
use std::sync::OnceLock;

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {{
        static $name: OnceLock<Regex> = OnceLock::new();
        $name.get_or_init(|| Regex::new($pattern).expect("valid regex"))
    }};
}

/// Repairs common faults in a JSON string.
///
/// Two classes of fault are fixed by substitution: missing commas between
/// adjacent bracket pairs (`} {`, `] {`, `} [`, `] [`) and trailing commas
/// immediately before a closing bracket. After the substitutions the result
/// is trial-parsed; if it still fails, a single `}` and then a single `]`
/// are tried as appends, returning the first variant that parses. If nothing
/// parses the substituted data is returned unmodified.
///
/// # Examples
///
/// ```
/// use proseclean::json::fix_faulty_json;
///
/// assert_eq!(fix_faulty_json(r#"[{"a": 1} {"b": 2}]"#), r#"[{"a": 1},{"b": 2}]"#);
/// assert_eq!(fix_faulty_json(r#"{"a": 1,}"#), r#"{"a": 1}"#);
/// ```
#[must_use]
pub fn fix_faulty_json(data: &str) -> String {
    // Fix missing commas
    let data = static_regex!(BRACE_BRACE, r"\}\s*\{").replace_all(data, "},{");
    let data = static_regex!(BRACKET_BRACE, r"\]\s*\{").replace_all(&data, "],{");
    let data = static_regex!(BRACE_BRACKET, r"\}\s*\[").replace_all(&data, "},{");
    let data = static_regex!(BRACKET_BRACKET, r"\]\s*\[").replace_all(&data, "],[");

    // Fix trailing commas
    let data = static_regex!(TRAILING_COMMA_BRACE, r",\s*\}").replace_all(&data, "}");
    let data = static_regex!(TRAILING_COMMA_BRACKET, r",\s*\]").replace_all(&data, "]");
    let data = data.into_owned();

    if serde_json::from_str::<serde_json::Value>(&data).is_ok() {
        return data;
    }

    let closed = format!("{data}}}");
    if serde_json::from_str::<serde_json::Value>(&closed).is_ok() {
        return closed;
    }

    let closed = format!("{data}]");
    if serde_json::from_str::<serde_json::Value>(&closed).is_ok() {
        return closed;
    }

    data
}

/// Quotes bare object keys.
///
/// Rewrites `{key: ...` and `, key: ...` to `{ "key": ...` / `, "key": ...`.
/// Keys are word characters only; anything already quoted is left alone.
#[must_use]
pub fn fix_unquoted_keys(data: &str) -> String {
    static_regex!(UNQUOTED_KEY, r#"([{,])\s*(\w+)\s*:"#)
        .replace_all(data, "$1 \"$2\":")
        .into_owned()
}

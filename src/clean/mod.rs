//! Cleanup transforms for generated text.
//!
//! Small, deterministic repairs applied around the main formatting pipeline:
//! truncation cleanup, whitespace normalization, speaker-line filtering and
//! chat-history splitting. All are pure functions over borrowed input.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {{
        static $name: OnceLock<Regex> = OnceLock::new();
        $name.get_or_init(|| Regex::new($pattern).expect("valid regex"))
    }};
}

/// Characters that can legitimately end a sentence in generated narrative,
/// including span delimiters.
const SENTENCE_ENDINGS: [char; 5] = ['.', '!', '?', '"', '*'];

/// Removes an unfinished sentence from the end of the input.
///
/// Works backward to the last sentence-ending character, preserving line
/// breaks and other formatting before the cut, then drops any orphaned
/// trailing markers. Input with no sentence ending at all is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use proseclean::clean::strip_partial_sentences;
///
/// assert_eq!(
///     strip_partial_sentences("She waves. Then she turns and"),
///     "She waves."
/// );
/// ```
#[must_use]
pub fn strip_partial_sentences(text: &str) -> String {
    for (i, c) in text.char_indices().rev() {
        if SENTENCE_ENDINGS.contains(&c) {
            return remove_trailing_markers(&text[..i + c.len_utf8()]);
        }
    }
    text.to_string()
}

/// Drops trailing `"` / `*` characters whose total count in the text is odd.
///
/// An odd-count marker at the very end is the opening half of a span whose
/// content was truncated away; a balanced marker is a legitimate closer and
/// is kept.
#[must_use]
pub fn remove_trailing_markers(text: &str) -> String {
    let mut text = text.trim_end().to_string();

    while let Some(last) = text.chars().last() {
        if (last == '"' || last == '*') && text.matches(last).count() % 2 == 1 {
            text.pop();
            let trimmed_len = text.trim_end().len();
            text.truncate(trimmed_len);
        } else {
            break;
        }
    }

    text
}

/// Keeps the right-hand side of the first `:` and strips leading
/// non-alphabetic characters from it.
///
/// Generators like to echo a label (`Answer: ...`, `Alice: ...`) before the
/// content; this removes it.
#[must_use]
pub fn clean_paragraph(paragraph: &str) -> String {
    let kept = paragraph.split(':').nth(1).unwrap_or(paragraph);
    static_regex!(LEADING_NON_ALPHA, r"^[^a-zA-Z]*")
        .replace(kept, "")
        .into_owned()
}

/// Trims the message and collapses runs of spaces.
#[must_use]
pub fn clean_message(message: &str) -> String {
    static_regex!(SPACE_RUNS, r" +")
        .replace_all(message.trim(), " ")
        .into_owned()
}

/// Restricts an identifier to `[a-zA-Z0-9_- ]`.
#[must_use]
pub fn clean_id(name: &str) -> String {
    static_regex!(ID_CHARS, r"[^a-zA-Z0-9_\- ]")
        .replace_all(name, "")
        .into_owned()
}

/// Collapses three or more consecutive line breaks to two.
#[must_use]
pub fn remove_extra_linebreaks(s: &str) -> String {
    static_regex!(EXTRA_LINEBREAKS, r"\n{3,}")
        .replace_all(s, "\n\n")
        .into_owned()
}

/// Rewrites parenthetical and square-bracket exposition to starred spans.
#[must_use]
pub fn replace_exposition_markers(s: &str) -> String {
    s.replace(['(', ')', '[', ']'], "*")
}

/// Cleans a generated dialogue response attributed to `main_name`.
///
/// The first line is always kept. Later lines keep going while they belong
/// to the main speaker (their prefix is stripped) or carry no speaker label
/// at all; an all-caps line is a screenplay-style speaker change and stops
/// the scan, and any other `name:` line is dropped. The result is stripped
/// of partial sentences and whitespace-normalized.
#[must_use]
pub fn clean_dialogue(dialogue: &str, main_name: &str) -> String {
    let dialogue = if dialogue.starts_with(main_name) {
        dialogue.to_string()
    } else {
        format!("{main_name}: {dialogue}")
    };

    let prefix = format!("{main_name}: ");
    let mut cleaned: Vec<&str> = Vec::new();

    for line in dialogue.split('\n') {
        if cleaned.is_empty() {
            cleaned.push(line);
            continue;
        }

        if let Some(rest) = line.strip_prefix(&prefix) {
            cleaned.push(rest);
            continue;
        }

        // An all-caps line is likely a new speaker in movie-script format.
        if is_all_caps(line.trim()) {
            break;
        }

        if !line.contains(':') {
            cleaned.push(line);
        }
    }

    clean_message(&strip_partial_sentences(&cleaned.join("\n")))
}

/// True when the text has cased characters and none of them is lowercase.
fn is_all_caps(text: &str) -> bool {
    text.chars().any(char::is_alphabetic) && !text.chars().any(char::is_lowercase)
}

/// Splits raw chat history into individual messages.
///
/// Message boundaries are lines starting with `{name}: ` for any of the
/// given speaker names. A string with fewer than two boundaries is returned
/// whole.
#[must_use]
pub fn parse_messages_from_str(string: &str, names: &[&str]) -> Vec<String> {
    let pattern = format!(
        "(?m)^({}): ?",
        names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|")
    );
    let Ok(speaker_regex) = Regex::new(&pattern) else {
        return vec![string.trim().to_string()];
    };

    let starts: Vec<usize> = speaker_regex.find_iter(string).map(|m| m.start()).collect();

    if starts.len() < 2 {
        return vec![string.trim().to_string()];
    }

    let mut messages = Vec::new();
    for window in starts.windows(2) {
        messages.push(string[window[0]..window[1]].trim().to_string());
    }
    if let Some(&last) = starts.last() {
        messages.push(string[last..].trim().to_string());
    }

    messages
}

/// Expands `{conditional:value:compare:true_value:false_value}` template
/// markers.
///
/// `value` may reference `{param}` placeholders resolved from `params`; the
/// comparison against `compare` is case-insensitive.
#[must_use]
pub fn replace_conditional(input: &str, params: &HashMap<String, String>) -> String {
    static_regex!(CONDITIONAL, r"\{conditional:(.*?):(.*?):(.*?):(.*?)\}")
        .replace_all(input, |caps: &regex::Captures<'_>| {
            let mut value = caps[1].to_string();
            for (key, replacement) in params {
                value = value.replace(&format!("{{{key}}}"), replacement);
            }
            if value.eq_ignore_ascii_case(&caps[2]) {
                caps[3].to_string()
            } else {
                caps[4].to_string()
            }
        })
        .into_owned()
}

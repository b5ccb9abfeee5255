//! Dialogue formatting entry points.
//!
//! [`ensure_dialog_format`] takes a block of generated narrative and
//! rebalances its dialogue (`"`) and action/thought (`*`) markers so every
//! span is properly encased. Formatting is fail-soft: a line that cannot be
//! balanced is logged and passed through unmodified, never aborting the rest
//! of the block.

use crate::dialogue::segment::{LineScanner, Marker};
use crate::error::FormatError;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogFormat {
    /// Keep action/thought markers in the result.
    #[default]
    Markdown,
    /// Strip action/thought markers from the result after formatting.
    Plain,
}

/// Rebalances dialogue and action/thought markers across a block of text.
///
/// Multi-line input is split on line breaks, each physical line formatted
/// independently, and the results rejoined. A line with no markers of its own
/// inherits a wrap consistent with the block's dominant style: a block using
/// only asterisks wraps bare lines in quotes, and vice versa.
///
/// When `speaker` is given, a leading `"{speaker}:"` prefix is stripped
/// before processing and the result is returned as `"{speaker}: {line}"`.
///
/// Never errors: a line the formatter cannot balance is logged and passed
/// through unmodified.
///
/// # Examples
///
/// ```
/// use proseclean::dialogue::{DialogFormat, ensure_dialog_format};
///
/// let out = ensure_dialog_format("*She nods*\nOkay then", None, DialogFormat::Markdown);
/// assert_eq!(out, "*She nods*\n\"Okay then\"");
/// ```
#[must_use]
pub fn ensure_dialog_format(line: &str, speaker: Option<&str>, format: DialogFormat) -> String {
    let mut line = line.to_string();

    if let Some(name) = speaker {
        let prefix = format!("{name}:");
        if let Some(rest) = line.strip_prefix(&prefix) {
            line = rest.trim_start().to_string();
        }
    }

    // Already fully and exclusively wrapped by one marker pair.
    if line.starts_with('*')
        && line.ends_with('*')
        && line.matches('*').count() == 2
        && !line.contains('"')
    {
        return attach_speaker(speaker, &line);
    }
    if line.starts_with('"')
        && line.ends_with('"')
        && line.matches('"').count() == 2
        && !line.contains('*')
    {
        return attach_speaker(speaker, &line);
    }

    let has_asterisks = line.contains('*');
    let has_quotes = line.contains('"');
    let default_wrap = match (has_asterisks, has_quotes) {
        (true, false) => Some(Marker::Quote),
        (false, true) => Some(Marker::Star),
        _ => None,
    };

    let formatted: Vec<String> = line
        .split('\n')
        .map(|physical| match ensure_dialog_line_format(physical, default_wrap) {
            Ok(balanced) => balanced,
            Err(err) => {
                tracing::error!(line = physical, error = %err, "passing dialogue line through unformatted");
                physical.to_string()
            }
        })
        .collect();
    let mut line = formatted.join("\n");

    if let Some(name) = speaker {
        line = format!("{name}: {line}");
    }

    if format == DialogFormat::Plain {
        line = line.replace('*', "");
    }

    line
}

/// Prepends the `"{name}: "` prefix when a speaker is given.
fn attach_speaker(speaker: Option<&str>, line: &str) -> String {
    speaker.map_or_else(|| line.to_string(), |name| format!("{name}: {line}"))
}

/// Rebalances markers within a single physical line.
///
/// The scan classifies runs of the line into segments (see
/// [`LineScanner`](crate::dialogue::segment)), then post-processes the
/// segment list: bare markers merge into their predecessor, segments missing
/// half their pair get it added, marker-free segments take the mirrored wrap
/// of their nearest marked neighbor, and any segment left with an odd marker
/// count has the stray stripped or completed.
///
/// # Errors
///
/// Returns [`FormatError::Degraded`] when the rebalanced line still fails
/// the even-marker-count check.
pub fn ensure_dialog_line_format(
    line: &str,
    default_wrap: Option<Marker>,
) -> Result<String, FormatError> {
    let original = line;
    let mut line = line.trim().to_string();

    // Quote/asterisk adjacency collapses to the quote, and punctuation
    // migrates to the inside of a starred span.
    line = line.replace("\"*", "\"").replace("*\"", "\"");
    line = line.replace("*, \"", "* \"");
    line = line.replace("*. \"", "* \"");
    line = line.replace("*.", ".*");

    // A trailing space-then-marker is the residue of a truncated segment.
    if line.ends_with(" *") || line.ends_with(" \"") {
        line.truncate(line.len() - 2);
    }

    if !line.contains('*')
        && !line.contains('"')
        && let Some(wrap) = default_wrap
        && !line.is_empty()
    {
        let c = wrap.ch();
        return Ok(format!("{c}{line}{c}"));
    }

    let mut segments = LineScanner::scan(&line);
    merge_bare_markers(&mut segments);
    pad_missing_pairs(&mut segments);
    wrap_from_neighbors(&mut segments);
    for segment in &mut segments {
        *segment = clean_uneven_markers(segment, '"');
        *segment = clean_uneven_markers(segment, '*');
    }

    let joined = segments
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    let formatted = joined.trim().replace("\",\"", "").replace("\".\"", "");

    if formatted.matches('"').count() % 2 == 1 || formatted.matches('*').count() % 2 == 1 {
        return Err(FormatError::Degraded {
            line: original.to_string(),
        });
    }

    Ok(formatted)
}

/// Merges a segment that is exactly one bare marker into its predecessor,
/// closing it, when the predecessor does not already end in a marker.
fn merge_bare_markers(segments: &mut [String]) {
    for i in 1..segments.len() {
        if segments[i] == "\"" || segments[i] == "*" {
            let prev = &segments[i - 1];
            if !prev.is_empty() && !prev.ends_with(['"', '*']) {
                let bare = std::mem::take(&mut segments[i]);
                segments[i - 1].push_str(&bare);
            }
        }
    }
}

/// Adds the missing half of an open/close pair to segments that start with a
/// marker but do not end with it, or vice versa.
fn pad_missing_pairs(segments: &mut [String]) {
    for segment in segments.iter_mut() {
        let (Some(first), Some(last)) = (segment.chars().next(), segment.chars().last()) else {
            continue;
        };

        if first == '*' && last != '*' {
            segment.push('*');
        } else if last == '*' && first != '*' {
            segment.insert(0, '*');
        } else if first == '"' && last != '"' {
            segment.push('"');
        } else if last == '"' && first != '"' {
            segment.insert(0, '"');
        }
    }
}

/// Assigns marker-free segments the wrap mirrored from their nearest marked
/// neighbor, previous neighbor first.
fn wrap_from_neighbors(segments: &mut [String]) {
    for i in 0..segments.len() {
        let segment = segments[i].clone();
        if segment.is_empty() || segment.starts_with(['"', '*']) {
            continue;
        }

        let prev_last = if i > 0 {
            segments[i - 1].chars().last()
        } else {
            None
        };
        let next_first = segments.get(i + 1).and_then(|s| s.chars().next());

        segments[i] = if prev_last == Some('"') {
            format!("*{segment}*")
        } else if prev_last == Some('*') {
            format!("\"{segment}\"")
        } else if next_first == Some('"') {
            format!("*{segment}*")
        } else if next_first == Some('*') {
            format!("\"{segment}\"")
        } else {
            segment
        };
    }
}

/// Strips one redundant marker from a chunk with an odd marker count, or
/// completes the pair when the stray is not at either end.
fn clean_uneven_markers(chunk: &str, marker: char) -> String {
    let count = chunk.matches(marker).count();

    if count % 2 == 1 {
        if let Some(stripped) = chunk.strip_suffix(marker) {
            return stripped.to_string();
        }
        if let Some(stripped) = chunk.strip_prefix(marker) {
            return stripped.to_string();
        }
        if count == 1 {
            return chunk.replace(marker, "");
        }
        return format!("{chunk}{marker}");
    }

    chunk.to_string()
}

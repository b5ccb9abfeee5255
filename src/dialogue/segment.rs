//! Marker classification and the per-line segment scanner.
//!
//! A line of generated narrative mixes spoken dialogue (wrapped in `"`) with
//! action/thought descriptions (wrapped in `*`). The scanner walks a line
//! character by character and cuts it into segments at marker boundaries,
//! inferring an opener for bare text by alternating from the last closed
//! marker type.

/// A span delimiter character: `"` for dialogue, `*` for action/thought.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Double quote - spoken dialogue.
    Quote,
    /// Asterisk - action or thought.
    Star,
}

impl Marker {
    /// Returns the delimiter character.
    #[must_use]
    pub const fn ch(self) -> char {
        match self {
            Self::Quote => '"',
            Self::Star => '*',
        }
    }

    /// Returns the opposite marker type.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Quote => Self::Star,
            Self::Star => Self::Quote,
        }
    }

    /// Classifies a character as a marker, if it is one.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '"' => Some(Self::Quote),
            '*' => Some(Self::Star),
            _ => None,
        }
    }
}

/// Scanner state: which marker (if any) opened the segment being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenState {
    /// No segment is accumulating.
    Closed,
    /// A segment opened by this marker is accumulating.
    Open(Marker),
    /// A segment without an opening marker is accumulating. Transient:
    /// post-processing assigns every surviving segment a wrap.
    Unclassified,
}

/// Character-by-character segment scanner for a single line.
///
/// Tracks the open marker, the accumulating segment buffer and the most
/// recently closed marker type (the "last classifier"). Produced segments
/// keep their marker characters inline; classification is carried by the
/// segment's first/last characters.
#[derive(Debug)]
pub(crate) struct LineScanner {
    segments: Vec<String>,
    segment: Option<String>,
    open: OpenState,
    last_classifier: Option<Marker>,
}

impl LineScanner {
    const fn new() -> Self {
        Self {
            segments: Vec::new(),
            segment: None,
            open: OpenState::Closed,
            last_classifier: None,
        }
    }

    /// Cuts `line` into raw segments.
    pub(crate) fn scan(line: &str) -> Vec<String> {
        let chars: Vec<char> = line.chars().collect();
        let mut scanner = Self::new();

        for (i, &c) in chars.iter().enumerate() {
            let is_last = i + 1 == chars.len();
            match Marker::from_char(c) {
                Some(marker) => scanner.on_marker(marker, is_last),
                None => scanner.on_text(c),
            }
        }

        scanner.finish()
    }

    /// Pushes the trimmed segment buffer onto the output list.
    fn flush(&mut self) {
        if let Some(segment) = self.segment.take() {
            self.segments.push(segment.trim().to_string());
        }
    }

    fn on_marker(&mut self, marker: Marker, is_last: bool) {
        match self.open {
            OpenState::Open(open) if open == marker => {
                // Closing the open segment.
                if let Some(segment) = self.segment.as_mut() {
                    segment.push(marker.ch());
                }
                self.flush();
                self.open = OpenState::Closed;
                self.last_classifier = Some(marker);
            }
            OpenState::Closed => {
                // Opening a fresh segment.
                self.open = OpenState::Open(marker);
                self.segment = Some(marker.ch().to_string());
                self.last_classifier = Some(marker);
            }
            OpenState::Open(_) | OpenState::Unclassified => {
                // A different marker while a segment is open: close the
                // pending segment and open a new one. At the line's final
                // character a non-empty pending segment absorbs the marker
                // instead (residue of a truncated span).
                if is_last && self.segment.as_deref().is_some_and(|s| !s.trim().is_empty()) {
                    if let Some(segment) = self.segment.as_mut() {
                        segment.push(marker.ch());
                    }
                    self.flush();
                    self.open = OpenState::Closed;
                    self.last_classifier = Some(marker);
                    return;
                }

                self.flush();
                self.open = OpenState::Open(marker);
                self.segment = Some(marker.ch().to_string());
                self.last_classifier = Some(marker);
            }
        }
    }

    fn on_text(&mut self, c: char) {
        if self.open == OpenState::Closed && c != ' ' {
            // Bare text after a closed segment: infer an opener by
            // alternating from the last classifier.
            match self.last_classifier {
                Some(last) => {
                    let inferred = last.other();
                    self.open = OpenState::Open(inferred);
                    self.segment = Some(format!("{}{c}", inferred.ch()));
                }
                None => {
                    self.open = OpenState::Unclassified;
                    self.segment = Some(c.to_string());
                }
            }
        } else if let Some(segment) = self.segment.as_mut() {
            segment.push(c);
        }
    }

    fn finish(mut self) -> Vec<String> {
        // Flush the remainder, dropping it when nothing but markers is left.
        if let Some(segment) = self.segment.take() {
            let trimmed = segment.trim();
            if !trimmed.trim_matches('*').trim_matches('"').is_empty() {
                self.segments.push(trimmed.to_string());
            }
        }
        self.segments
    }
}

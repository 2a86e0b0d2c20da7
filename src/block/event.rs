//! Line classification types.

/// Kind of list, decided by the item that opens it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `<ul>`
    Unordered,
    /// `<ol>`
    Ordered,
}

impl ListKind {
    /// HTML tag name for this list kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }

    /// Pick the list kind for a list opened by `marker`.
    ///
    /// With `legacy` set, a `*` marker opens an ordered list and `-` an
    /// unordered one. Otherwise every list is unordered.
    pub fn for_marker(marker: u8, legacy: bool) -> Self {
        if legacy && marker == b'*' {
            Self::Ordered
        } else {
            Self::Unordered
        }
    }
}

/// One input line, classified.
///
/// Classification is checked in a fixed order: heading, list item, then
/// everything else as paragraph text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `#`-prefixed heading. `level` is the number of `#` characters.
    Heading { level: usize, text: &'a str },
    /// `*` or `-` list item.
    ListItem { marker: u8, text: &'a str },
    /// Anything else, including blank lines.
    Text(&'a str),
}

impl<'a> Line<'a> {
    /// Classify a line that had a terminator, with the terminator removed.
    pub fn classify(line: &'a str) -> Self {
        Self::classify_with_terminator(line, true)
    }

    /// Classify a line, given whether it ended with a terminator.
    ///
    /// The terminator counts as the whitespace after a list marker, so a
    /// bare `-` or `*` is an empty item unless it ends the input.
    pub fn classify_with_terminator(line: &'a str, terminated: bool) -> Self {
        if let Some(heading) = Self::heading(line) {
            return heading;
        }
        if let Some(item) = Self::list_item(line, terminated) {
            return item;
        }
        Line::Text(line)
    }

    /// One or more `#`, exactly one space, then the rest of the line verbatim.
    fn heading(line: &'a str) -> Option<Self> {
        let bytes = line.as_bytes();
        let level = bytes.iter().take_while(|&&b| b == b'#').count();
        if level == 0 || bytes.get(level) != Some(&b' ') {
            return None;
        }
        Some(Line::Heading {
            level,
            text: &line[level + 1..],
        })
    }

    /// `*` or `-`, one whitespace character, then the rest of the line.
    fn list_item(line: &'a str, terminated: bool) -> Option<Self> {
        let marker = *line.as_bytes().first()?;
        if marker != b'*' && marker != b'-' {
            return None;
        }
        // Markers are ASCII, so index 1 is a char boundary.
        let rest = &line[1..];
        if rest.is_empty() {
            return terminated.then_some(Line::ListItem { marker, text: "" });
        }
        let sep = rest.chars().next().filter(|c| c.is_whitespace())?;
        Some(Line::ListItem {
            marker,
            text: &rest[sep.len_utf8()..],
        })
    }

    /// Whether a text line holds only whitespace.
    pub fn is_blank(text: &str) -> bool {
        text.trim().is_empty()
    }
}

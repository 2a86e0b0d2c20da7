//! Splitting source text into lines.
//!
//! `\n`, `\r\n` and a lone `\r` all end a line. Each line remembers whether
//! it had a terminator, since a bare list marker only counts as an item when
//! something follows it.

use memchr::memchr2;

/// One source line with its terminator removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// Line content without the terminator.
    pub text: &'a str,
    /// Whether the line ended with a terminator (false only for a final
    /// line at end of input).
    pub terminated: bool,
}

/// Iterator over the lines of a source text.
///
/// # Example
/// ```
/// use markdown2html::lines::SourceLines;
///
/// let lines: Vec<_> = SourceLines::new("a\r\nb\rc").map(|l| l.text).collect();
/// assert_eq!(lines, ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct SourceLines<'a> {
    rest: &'a str,
}

impl<'a> SourceLines<'a> {
    /// Create an iterator over `input`.
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = SourceLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let bytes = self.rest.as_bytes();
        let Some(end) = memchr2(b'\n', b'\r', bytes) else {
            let text = self.rest;
            self.rest = "";
            return Some(SourceLine {
                text,
                terminated: false,
            });
        };
        let skip = if bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n') {
            2
        } else {
            1
        };
        // Terminators are ASCII, so both offsets are char boundaries.
        let text = &self.rest[..end];
        self.rest = &self.rest[end + skip..];
        Some(SourceLine {
            text,
            terminated: true,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rest.is_empty() {
            (0, Some(0))
        } else {
            (1, Some(self.rest.len()))
        }
    }
}

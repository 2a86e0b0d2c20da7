//! markdown2html: line-oriented converter from a small Markdown dialect to HTML
//!
//! The dialect covers headings, single-level lists and paragraphs, plus four
//! inline substitutions (bold, emphasis, MD5 hashing and removal). Output is a
//! list of HTML fragment lines joined with `\n`, without any document scaffold.
//!
//! # Design Principles
//! - One pass over the lines, one open block at a time
//! - Inline markup is stateless per line
//! - The core never fails; only file I/O can

pub mod block;
pub mod inline;
pub mod io;
pub mod lines;
pub mod render;

// Re-export primary types
pub use block::{BlockConverter, Line, ListKind};
pub use inline::parse_inline_markup;
pub use io::{ConvertError, convert_file};
pub use lines::{SourceLine, SourceLines};
pub use render::HtmlWriter;

/// Conversion options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// A list opened by `*` is rendered as `<ol>`, one opened by `-` as `<ul>`.
    /// When disabled, every list is `<ul>`.
    pub legacy_list_kinds: bool,
    /// Spaces prepended to the first line of each paragraph.
    pub paragraph_indent: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            legacy_list_kinds: true,
            paragraph_indent: 4,
        }
    }
}

/// Convert a sequence of lines into HTML fragment lines.
///
/// Lines must not carry their terminators; each one is treated as if it had
/// one. Use [`convert_source`] for raw text.
pub fn convert_lines<I, S>(lines: I, options: &Options) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = lines.into_iter();
    let writer = HtmlWriter::with_capacity_for(lines.size_hint().0);
    let mut converter = BlockConverter::with_writer(*options, writer);
    for line in lines {
        converter.push_line(line.as_ref());
    }
    converter.finish()
}

/// Split raw text into lines and convert them into HTML fragment lines.
pub fn convert_source(input: &str, options: &Options) -> Vec<String> {
    let lines = SourceLines::new(input);
    let writer = HtmlWriter::with_capacity_for(input.len() / 32);
    let mut converter = BlockConverter::with_writer(*options, writer);
    for line in lines {
        converter.push_line_with_terminator(line.text, line.terminated);
    }
    converter.finish()
}

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = markdown2html::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n\n<p>\n    World\n</p>");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    convert_source(input, options).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert!(options.legacy_list_kinds);
        assert_eq!(options.paragraph_indent, 4);
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(to_html("# A\r\n- b\r\n"), "<h1>A</h1>\n<ul>\n<li>b</li>\n</ul>");
    }

    #[test]
    fn test_lone_carriage_return_ends_line() {
        assert_eq!(to_html("a\rb\n"), "<p>\n    a\nb\n</p>");
    }

    #[test]
    fn test_convert_lines_accepts_owned() {
        let lines = vec!["## x".to_string()];
        assert_eq!(convert_lines(lines, &Options::default()), ["<h2>x</h2>"]);
    }
}

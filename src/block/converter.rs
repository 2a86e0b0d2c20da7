//! Block converter implementation.

use log::trace;

use crate::Options;
use crate::inline::parse_inline_markup;
use crate::render::HtmlWriter;

use super::event::{Line, ListKind};

/// The block currently open, if any.
///
/// A paragraph and a list are never open at the same time: opening one
/// always closes the other first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum OpenBlock {
    #[default]
    None,
    Paragraph,
    List(ListKind),
}

/// Line-oriented block converter.
///
/// Feed lines with [`push_line`](Self::push_line) and call
/// [`finish`](Self::finish) to close whatever is still open.
///
/// # Example
/// ```
/// use markdown2html::{BlockConverter, Options};
///
/// let mut converter = BlockConverter::new(Options::default());
/// converter.push_line("- a");
/// converter.push_line("- b");
/// assert_eq!(converter.finish(), ["<ul>", "<li>a</li>", "<li>b</li>", "</ul>"]);
/// ```
#[derive(Debug)]
pub struct BlockConverter {
    options: Options,
    block: OpenBlock,
    out: HtmlWriter,
    /// Reused for building the indented first line of a paragraph.
    scratch: String,
}

impl BlockConverter {
    /// Create a new converter.
    pub fn new(options: Options) -> Self {
        Self::with_writer(options, HtmlWriter::new())
    }

    /// Create a converter writing into a pre-sized writer.
    pub fn with_writer(options: Options, out: HtmlWriter) -> Self {
        Self {
            options,
            block: OpenBlock::None,
            out,
            scratch: String::new(),
        }
    }

    /// Process one input line that had a terminator, with the terminator
    /// removed.
    pub fn push_line(&mut self, line: &str) {
        self.push_line_with_terminator(line, true);
    }

    /// Process one input line, given whether it ended with a terminator.
    pub fn push_line_with_terminator(&mut self, line: &str, terminated: bool) {
        let line = Line::classify_with_terminator(line, terminated);
        trace!("{line:?} (open: {:?})", self.block);
        match line {
            Line::Heading { level, text } => self.heading(level, text),
            Line::ListItem { marker, text } => self.list_item(marker, text),
            Line::Text(text) => self.text(text),
        }
    }

    /// Close any open block and return the fragment lines.
    pub fn finish(mut self) -> Vec<String> {
        self.close_list();
        self.close_paragraph();
        self.out.into_fragments()
    }

    /// Headings close a paragraph but leave an open list alone.
    fn heading(&mut self, level: usize, text: &str) {
        self.close_paragraph();
        let tag = format!("h{level}");
        self.out.wrapped(&tag, &parse_inline_markup(text));
    }

    fn list_item(&mut self, marker: u8, text: &str) {
        self.close_paragraph();
        if !matches!(self.block, OpenBlock::List(_)) {
            let kind = ListKind::for_marker(marker, self.options.legacy_list_kinds);
            self.out.open_tag(kind.tag());
            self.block = OpenBlock::List(kind);
        }
        self.out.wrapped("li", &parse_inline_markup(text));
    }

    fn text(&mut self, text: &str) {
        self.close_list();
        let blank = Line::is_blank(text);
        match self.block {
            OpenBlock::None if !blank => {
                self.out.push_str("<p>");
                self.block = OpenBlock::Paragraph;
                self.scratch.clear();
                self.scratch
                    .extend(std::iter::repeat_n(' ', self.options.paragraph_indent));
                self.scratch.push_str(text);
                let content = parse_inline_markup(self.scratch.trim_end()).into_owned();
                self.out.push_string(content);
                return;
            }
            OpenBlock::Paragraph if blank => {
                self.out.push_str("</p>");
                self.block = OpenBlock::None;
            }
            _ => {}
        }
        let content = parse_inline_markup(text.trim_end()).into_owned();
        self.out.push_string(content);
    }

    fn close_paragraph(&mut self) {
        if self.block == OpenBlock::Paragraph {
            self.out.push_str("</p>");
            self.block = OpenBlock::None;
        }
    }

    fn close_list(&mut self) {
        if let OpenBlock::List(kind) = self.block {
            self.out.close_tag(kind.tag());
            self.block = OpenBlock::None;
        }
    }
}

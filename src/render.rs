//! HTML output writer.
//!
//! Output is an append-only list of fragment lines, joined with `\n` once
//! conversion is done. A fragment is one output line, not necessarily one
//! complete element.

/// Fragment buffer with pre-allocated capacity.
///
/// # Example
/// ```
/// use markdown2html::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.open_tag("p");
/// writer.push_string("    Hello".to_string());
/// writer.close_tag("p");
///
/// assert_eq!(writer.into_string(), "<p>\n    Hello\n</p>");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    fragments: Vec<String>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            fragments: Vec::with_capacity(64),
        }
    }

    /// Create with capacity based on the number of input lines.
    ///
    /// Most lines produce one fragment; openers and closers add a few more.
    #[inline]
    pub fn with_capacity_for(line_count: usize) -> Self {
        Self {
            fragments: Vec::with_capacity(line_count + line_count / 4 + 2),
        }
    }

    /// Append an already built fragment.
    #[inline]
    pub fn push_string(&mut self, fragment: String) {
        self.fragments.push(fragment);
    }

    /// Append a static fragment.
    #[inline]
    pub fn push_str(&mut self, fragment: &'static str) {
        self.fragments.push(fragment.to_owned());
    }

    /// Append `<tag>` as its own fragment.
    #[inline]
    pub fn open_tag(&mut self, tag: &str) {
        self.fragments.push(format!("<{tag}>"));
    }

    /// Append `</tag>` as its own fragment.
    #[inline]
    pub fn close_tag(&mut self, tag: &str) {
        self.fragments.push(format!("</{tag}>"));
    }

    /// Append `<tag>content</tag>` as a single fragment.
    #[inline]
    pub fn wrapped(&mut self, tag: &str, content: &str) {
        let mut fragment = String::with_capacity(content.len() + 2 * tag.len() + 5);
        fragment.push('<');
        fragment.push_str(tag);
        fragment.push('>');
        fragment.push_str(content);
        fragment.push_str("</");
        fragment.push_str(tag);
        fragment.push('>');
        self.fragments.push(fragment);
    }

    /// Consume the writer and return the fragment lines.
    #[inline]
    pub fn into_fragments(self) -> Vec<String> {
        self.fragments
    }

    /// Consume the writer and join fragments with `\n`.
    ///
    /// No trailing newline is added.
    #[inline]
    pub fn into_string(self) -> String {
        self.fragments.join("\n")
    }
}

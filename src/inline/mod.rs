//! Inline markup transformer.
//!
//! Substitutions run in a fixed order over a single line:
//! 1. `**text**` becomes `<b>text</b>`
//! 2. `__text__` becomes `<em>text</em>`
//! 3. `[[text]]` becomes the hex MD5 digest of `text`
//! 4. `((text))` is removed
//!
//! Each pattern is shortest-match and applied to every non-overlapping
//! occurrence, left to right. Unmatched delimiters stay as they are. The
//! transformer keeps no state between lines.

mod digest;
mod scan;

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub use digest::md5_hex;
pub use scan::has_markup_delimiters;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());
static DIGEST: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[(.+?)\]\]").unwrap());
static REMOVAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\((.*?)\)\)").unwrap());

/// Apply inline substitutions to one line of text.
///
/// Text without any doubled delimiter is returned borrowed.
///
/// # Example
/// ```
/// use markdown2html::parse_inline_markup;
///
/// assert_eq!(parse_inline_markup("**hi** __there__"), "<b>hi</b> <em>there</em>");
/// assert_eq!(parse_inline_markup("((drop me))rest"), "rest");
/// ```
pub fn parse_inline_markup(text: &str) -> Cow<'_, str> {
    if !has_markup_delimiters(text.as_bytes()) {
        return Cow::Borrowed(text);
    }

    let bold = BOLD.replace_all(text, "<b>${1}</b>");
    let emphasis = EMPHASIS.replace_all(&bold, "<em>${1}</em>");
    // Runs after bold and emphasis, so their tags are part of the hashed text.
    let digested = DIGEST.replace_all(&emphasis, |caps: &Captures<'_>| md5_hex(&caps[1]));
    let removed = REMOVAL.replace_all(&digested, "");
    Cow::Owned(removed.into_owned())
}

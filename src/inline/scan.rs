//! Fast pre-scan for inline markup delimiters.

use memchr::{memchr_iter, memchr3_iter};

/// Whether `b` at `pos` starts a doubled delimiter (`**`, `__`, `[[`, `((`).
#[inline]
fn is_doubled(text: &[u8], pos: usize) -> bool {
    text.get(pos + 1) == Some(&text[pos])
}

/// Check whether `text` contains any opening delimiter.
///
/// Every substitution needs a doubled opener, so a line without one can be
/// passed through untouched.
#[inline]
pub fn has_markup_delimiters(text: &[u8]) -> bool {
    memchr3_iter(b'*', b'_', b'[', text).any(|pos| is_doubled(text, pos))
        || memchr_iter(b'(', text).any(|pos| is_doubled(text, pos))
}

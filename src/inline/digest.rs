//! `[[...]]` hash substitution.

/// Lowercase hexadecimal MD5 digest of the UTF-8 bytes of `text`.
#[inline]
pub fn md5_hex(text: &str) -> String {
    format!("{:x}", md5::compute(text.as_bytes()))
}

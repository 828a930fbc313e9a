//! HTML escaping for the spans the renderer can optionally protect.
//!
//! Fast-path: a memchr scan decides whether any reserved byte is present;
//! clean input is copied straight through.

use memchr::{memchr, memchr3};

/// Check if text content contains `<`, `>` or `&`.
#[inline]
pub fn needs_text_escape(input: &str) -> bool {
    memchr3(b'<', b'>', b'&', input.as_bytes()).is_some()
}

/// Check if an attribute value contains a byte that must be escaped
/// inside a double-quoted attribute.
#[inline]
pub fn needs_attr_escape(input: &str) -> bool {
    needs_text_escape(input) || memchr(b'"', input.as_bytes()).is_some()
}

/// Escape HTML text content into output buffer.
///
/// # Example
/// ```
/// use mdpage::escape::escape_text_into;
///
/// let mut out = String::new();
/// escape_text_into(&mut out, "<script>");
/// assert_eq!(out, "&lt;script&gt;");
/// ```
#[inline]
pub fn escape_text_into(out: &mut String, input: &str) {
    if needs_text_escape(input) {
        out.push_str(&html_escape::encode_text(input));
    } else {
        out.push_str(input);
    }
}

/// Escape a double-quoted attribute value into output buffer.
///
/// # Example
/// ```
/// use mdpage::escape::escape_attr_into;
///
/// let mut out = String::new();
/// escape_attr_into(&mut out, "a=1&b=\"2\"");
/// assert_eq!(out, "a=1&amp;b=&quot;2&quot;");
/// ```
#[inline]
pub fn escape_attr_into(out: &mut String, input: &str) {
    if needs_attr_escape(input) {
        out.push_str(&html_escape::encode_double_quoted_attribute(input));
    } else {
        out.push_str(input);
    }
}

/// Escape and return as a String.
///
/// Prefer `escape_text_into` to reuse buffers.
pub fn escape_text_to_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    escape_text_into(&mut out, input);
    out
}

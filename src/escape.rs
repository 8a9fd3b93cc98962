//! HTML escaping for verbatim spans.
//!
//! Fast-path optimized: scans for the first escapable character and only
//! allocates when one is found.

use memchr::memchr3;
use std::borrow::Cow;

/// Escape `&`, `<` and `>` in preformatted or inline nowiki text.
///
/// Quotes are left alone; verbatim content is only ever emitted as element
/// text, never inside an attribute.
///
/// # Example
/// ```
/// use ferrocreole::escape::escape_verbatim;
///
/// assert_eq!(escape_verbatim("a < b && c"), "a &lt; b &amp;&amp; c");
/// assert_eq!(escape_verbatim("plain"), "plain");
/// ```
#[inline]
pub fn escape_verbatim(input: &str) -> Cow<'_, str> {
    match first_escape(input) {
        None => Cow::Borrowed(input),
        Some(pos) => {
            let mut out = String::with_capacity(input.len() + input.len() / 8 + 8);
            out.push_str(&input[..pos]);
            escape_verbatim_into(&mut out, &input[pos..]);
            Cow::Owned(out)
        }
    }
}

/// Escape `&`, `<` and `>` into an existing buffer.
#[inline]
pub fn escape_verbatim_into(out: &mut String, input: &str) {
    if first_escape(input).is_none() {
        out.push_str(input);
        return;
    }
    html_escape::encode_text_to_string(input, out);
}

/// Check if text needs any escaping.
#[inline]
pub fn needs_escape(input: &str) -> bool {
    first_escape(input).is_some()
}

#[inline]
fn first_escape(input: &str) -> Option<usize> {
    memchr3(b'<', b'>', b'&', input.as_bytes())
}

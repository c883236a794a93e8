//! Whitespace rules for contact form text.
//!
//! Browsers and the contact form treat U+FEFF as whitespace and U+0085 as
//! ordinary text, the reverse of Rust's `char::is_whitespace`.

/// Returns `true` for characters stripped from the ends of form fields.
#[must_use]
pub(crate) fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Removes leading and trailing form whitespace.
#[must_use]
pub(crate) fn trim_form_text(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

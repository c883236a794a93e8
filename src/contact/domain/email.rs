//! Validated email address type.

use super::{ContactValidationError, whitespace::trim_form_text};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal and is exercised by unit tests"
)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[\x{85}[^\s\x{FEFF}@]]+",
        r"@[\x{85}[^\s\x{FEFF}@]]+",
        r"\.[\x{85}[^\s\x{FEFF}@]]+$",
    ))
    .expect("email pattern compiles")
});

/// Email address that matches `local@domain.tld`.
///
/// The check is deliberately loose: one non-whitespace run without `@`, an
/// `@`, then a domain containing a dot. No form whitespace anywhere.
///
/// Deserialization runs the same validation as [`EmailAddress::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// The input is trimmed before matching.
    ///
    /// # Errors
    ///
    /// Returns [`ContactValidationError::InvalidEmail`] when the trimmed value
    /// does not match the pattern.
    pub fn new(value: impl Into<String>) -> Result<Self, ContactValidationError> {
        let raw = value.into();
        let trimmed = trim_form_text(&raw);
        if !EMAIL_PATTERN.is_match(trimmed) {
            return Err(ContactValidationError::InvalidEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ContactValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

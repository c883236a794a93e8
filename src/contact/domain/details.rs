//! Trimmed, validated contact form fields.

use super::{ContactField, ContactValidationError, EmailAddress, whitespace::trim_form_text};
use serde::Serialize;

/// The four text fields of a contact message after trimming and validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    name: String,
    email: EmailAddress,
    subject: String,
    message: String,
}

impl ContactDetails {
    /// Validates and trims the four contact fields.
    ///
    /// Every field is trimmed first. Fields that become empty are reported
    /// together; the email pattern is only checked once all fields carry
    /// text.
    ///
    /// # Errors
    ///
    /// Returns [`ContactValidationError::EmptyAfterTrim`] listing the
    /// whitespace-only fields, or [`ContactValidationError::InvalidEmail`]
    /// when the email does not match `local@domain.tld`.
    pub fn new(
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<Self, ContactValidationError> {
        let trimmed = [
            trim_form_text(name),
            trim_form_text(email),
            trim_form_text(subject),
            trim_form_text(message),
        ];

        let empty: Vec<ContactField> = ContactField::ALL
            .into_iter()
            .zip(trimmed)
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect();
        if !empty.is_empty() {
            return Err(ContactValidationError::EmptyAfterTrim(empty));
        }

        let [trimmed_name, trimmed_email, trimmed_subject, trimmed_message] = trimmed;
        Ok(Self {
            name: trimmed_name.to_owned(),
            email: EmailAddress::new(trimmed_email)?,
            subject: trimmed_subject.to_owned(),
            message: trimmed_message.to_owned(),
        })
    }

    /// Returns the sender name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sender email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

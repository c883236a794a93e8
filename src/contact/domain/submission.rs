//! Raw contact form submission as received from a client.

use super::{ContactDetails, ContactField, ContactValidationError};
use serde::{Deserialize, Serialize};

/// Unvalidated contact form input.
///
/// Every field is optional so that absent fields can be reported by name
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Sender name.
    #[serde(default)]
    pub name: Option<String>,
    /// Sender email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Message subject line.
    #[serde(default)]
    pub subject: Option<String>,
    /// Message body.
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactSubmission {
    /// Creates a submission with all four fields present.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: Some(subject.into()),
            message: Some(message.into()),
        }
    }

    /// Reports which fields carry a non-empty raw value.
    ///
    /// The order matches [`ContactField::ALL`].
    #[must_use]
    pub fn received(&self) -> [(ContactField, bool); 4] {
        ContactField::ALL.map(|field| (field, self.raw(field).is_some_and(|v| !v.is_empty())))
    }

    /// Validates the submission into trimmed contact details.
    ///
    /// # Errors
    ///
    /// Returns [`ContactValidationError::MissingFields`] when any field is
    /// absent or empty, otherwise the errors of [`ContactDetails::new`].
    pub fn validate(&self) -> Result<ContactDetails, ContactValidationError> {
        let missing: Vec<ContactField> = self
            .received()
            .into_iter()
            .filter(|(_, present)| !present)
            .map(|(field, _)| field)
            .collect();
        if !missing.is_empty() {
            return Err(ContactValidationError::MissingFields(missing));
        }

        ContactDetails::new(
            self.name.as_deref().unwrap_or_default(),
            self.email.as_deref().unwrap_or_default(),
            self.subject.as_deref().unwrap_or_default(),
            self.message.as_deref().unwrap_or_default(),
        )
    }

    fn raw(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => self.name.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Subject => self.subject.as_deref(),
            ContactField::Message => self.message.as_deref(),
        }
    }
}

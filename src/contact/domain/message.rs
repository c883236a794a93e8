//! Contact message aggregate.

use super::{ContactDetails, ContactMessageId, EmailAddress};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A validated contact message that has not been stored yet.
///
/// The creation timestamp is fixed here; the identifier is assigned by the
/// store on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    details: ContactDetails,
    created_at: DateTime<Utc>,
}

impl NewContactMessage {
    /// Stamps validated details with the current clock time.
    #[must_use]
    pub fn new(details: ContactDetails, clock: &impl Clock) -> Self {
        Self::at(details, clock.utc())
    }

    /// Creates a pending message with an explicit creation timestamp.
    #[must_use]
    pub const fn at(details: ContactDetails, created_at: DateTime<Utc>) -> Self {
        Self {
            details,
            created_at,
        }
    }

    /// Returns the validated details.
    #[must_use]
    pub const fn details(&self) -> &ContactDetails {
        &self.details
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Completes the message with a store-assigned identifier.
    #[must_use]
    pub fn with_id(self, id: ContactMessageId) -> ContactMessage {
        ContactMessage {
            id,
            name: self.details.name().to_owned(),
            email: self.details.email().clone(),
            subject: self.details.subject().to_owned(),
            message: self.details.message().to_owned(),
            created_at: self.created_at,
        }
    }
}

/// Parameter object for reconstructing a stored contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedContactData {
    /// Stored identifier.
    pub id: ContactMessageId,
    /// Stored, already validated fields.
    pub details: ContactDetails,
    /// Stored creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A stored contact message.
///
/// Serializes to the wire shape
/// `{ id, name, email, subject, message, createdAt }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    id: ContactMessageId,
    name: String,
    email: EmailAddress,
    subject: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Reconstructs a message from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedContactData) -> Self {
        NewContactMessage::at(data.details, data.created_at).with_id(data.id)
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> ContactMessageId {
        self.id
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

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

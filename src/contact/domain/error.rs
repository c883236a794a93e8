//! Error types for contact submission validation and parsing.

use super::ContactField;
use thiserror::Error;

/// Errors returned while validating a contact submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactValidationError {
    /// One or more fields were absent or empty before trimming.
    #[error("all fields are required (missing: {})", join_fields(.0))]
    MissingFields(Vec<ContactField>),

    /// One or more fields contained only whitespace.
    #[error("all fields must contain non-whitespace characters (empty: {})", join_fields(.0))]
    EmptyAfterTrim(Vec<ContactField>),

    /// The email address does not look like `local@domain.tld`.
    #[error("invalid email format")]
    InvalidEmail,

    /// The store refused the record on its own schema or constraint checks.
    #[error("validation error: {0}")]
    Rejected(String),
}

impl ContactValidationError {
    /// Returns the fields named by the error, if any.
    #[must_use]
    pub fn fields(&self) -> &[ContactField] {
        match self {
            Self::MissingFields(fields) | Self::EmptyAfterTrim(fields) => fields,
            Self::InvalidEmail => &[ContactField::Email],
            Self::Rejected(_) => &[],
        }
    }
}

/// Error returned when a string is not a valid contact message identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid contact message id: {0}")]
pub struct ParseContactMessageIdError(pub String);

fn join_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

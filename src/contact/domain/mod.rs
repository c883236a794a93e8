//! Domain model for contact-form submissions.
//!
//! A contact message is created once from a validated submission and is
//! never updated afterwards. Validation, identifiers and the store readiness
//! states live here; persistence and transport concerns stay outside.

mod details;
mod email;
mod error;
mod field;
mod ids;
mod message;
mod readiness;
mod submission;
mod whitespace;

pub use details::ContactDetails;
pub use email::EmailAddress;
pub use error::{ContactValidationError, ParseContactMessageIdError};
pub use field::ContactField;
pub use ids::ContactMessageId;
pub use message::{ContactMessage, NewContactMessage, PersistedContactData};
pub use readiness::StoreReadiness;
pub use submission::ContactSubmission;

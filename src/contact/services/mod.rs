//! Application services for contact message submission and management.

mod contact;

pub use contact::{ContactErrorKind, ContactService, ContactServiceError, ContactServiceResult};

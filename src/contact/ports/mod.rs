//! Port contracts for contact message persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the contact
//! service.

pub mod store;

pub use store::{ContactMessageStore, ContactStoreError, ContactStoreResult};

//! Diesel row models for contact message persistence.

use super::schema::contact_messages;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for contact message records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contact_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ContactMessageRow {
    /// Store-generated identifier.
    pub id: uuid::Uuid,
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for contact message records.
///
/// The identifier is omitted so the database default generates it.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contact_messages)]
pub struct NewContactMessageRow {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

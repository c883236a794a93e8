//! `PostgreSQL` adapter for contact message persistence.

mod models;
mod schema;
mod store;

pub use store::{ContactPgPool, PostgresContactStore, PostgresStoreSettings};

//! Persistence adapters for the contact module.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryContactStore`]: thread-safe in-memory storage with a
//!   controllable readiness state, for tests and local runs
//! - [`postgres::PostgresContactStore`]: `PostgreSQL` persistence using
//!   Diesel and an r2d2 connection pool

pub mod memory;
pub mod postgres;

mod readiness;

pub use readiness::ReadinessCell;

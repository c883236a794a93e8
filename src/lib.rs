//! Portfolio contact: backend for a portfolio site's contact form.
//!
//! Visitors submit a name, email address, subject and message; the site
//! owner lists, reads and deletes the stored messages. Messages are kept in
//! `PostgreSQL` and served over a small JSON API.
//!
//! # Architecture
//!
//! The contact module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`contact`]: Contact message domain, store port, adapters and service
//! - [`http`]: JSON API routes over the contact service
//! - [`config`]: Environment-driven server configuration
//! - [`telemetry`]: Tracing setup and log-safe helpers

pub mod config;
pub mod contact;
pub mod http;
pub mod telemetry;

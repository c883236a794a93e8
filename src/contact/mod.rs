//! Contact-form submissions for the portfolio site.
//!
//! Visitors submit a name, email, subject and message through the contact
//! form; the site owner lists and deletes them from the messages page. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

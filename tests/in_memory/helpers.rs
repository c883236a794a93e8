//! Shared test helpers for in-memory store integration tests.

use std::io;
use std::sync::Arc;

use mockable::DefaultClock;
use portfolio_contact::contact::{
    adapters::memory::InMemoryContactStore,
    domain::{ContactMessage, ContactSubmission},
    services::{ContactService, ContactServiceError},
};
use rstest::fixture;
use tokio::runtime::Runtime;

/// Service type exercised by the integration tests.
pub type TestService = ContactService<InMemoryContactStore, DefaultClock>;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh, connected in-memory store for each test.
#[fixture]
pub fn store() -> Arc<InMemoryContactStore> {
    Arc::new(InMemoryContactStore::new())
}

/// Builds a service over the given store.
pub fn service_for(store: &Arc<InMemoryContactStore>) -> TestService {
    ContactService::new(Arc::clone(store), Arc::new(DefaultClock))
}

/// Builds a complete submission whose subject identifies it.
pub fn submission(subject: &str) -> ContactSubmission {
    ContactSubmission::new("Jo", "jo@x.com", subject, "Hello there")
}

/// Submits one message per subject, in order.
///
/// # Errors
///
/// Returns the first submission failure.
pub fn submit_all(
    rt: &Runtime,
    service: &TestService,
    subjects: &[&str],
) -> Result<Vec<ContactMessage>, ContactServiceError> {
    subjects
        .iter()
        .map(|subject| rt.block_on(service.submit(&submission(subject))))
        .collect()
}

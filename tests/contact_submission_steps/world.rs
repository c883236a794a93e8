//! Shared world state for contact submission BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use portfolio_contact::contact::{
    adapters::memory::InMemoryContactStore,
    domain::ContactMessage,
    services::{ContactService, ContactServiceError},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestContactService = ContactService<InMemoryContactStore, DefaultClock>;

/// Scenario world for contact submission behaviour tests.
pub struct ContactWorld {
    /// Store behind the service, kept for readiness control.
    pub store: Arc<InMemoryContactStore>,
    /// The contact service under test.
    pub service: TestContactService,
    /// Message stored during a `Given` step.
    pub stored: Option<ContactMessage>,
    /// Result of the last submission.
    pub last_submit_result: Option<Result<ContactMessage, ContactServiceError>>,
    /// Result of the last deletion.
    pub last_delete_result: Option<Result<ContactMessage, ContactServiceError>>,
}

impl ContactWorld {
    /// Creates a world around an empty, connected store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryContactStore::new());
        let service = ContactService::new(Arc::clone(&store), Arc::new(DefaultClock));
        Self {
            store,
            service,
            stored: None,
            last_submit_result: None,
            last_delete_result: None,
        }
    }
}

impl Default for ContactWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ContactWorld {
    ContactWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

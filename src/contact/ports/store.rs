//! Store port for contact message persistence.

use crate::contact::domain::{ContactMessage, ContactMessageId, NewContactMessage, StoreReadiness};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for contact store operations.
pub type ContactStoreResult<T> = Result<T, ContactStoreError>;

/// Contact message persistence contract.
#[async_trait]
pub trait ContactMessageStore: Send + Sync {
    /// Reports the current connection state.
    ///
    /// The answer is a snapshot; the state may change before the next call.
    fn readiness(&self) -> StoreReadiness;

    /// Stores a new message and returns it with a store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ContactStoreError::Rejected`] when the store's own
    /// constraints refuse the record, or [`ContactStoreError::Persistence`]
    /// when the write fails.
    async fn insert(&self, message: NewContactMessage) -> ContactStoreResult<ContactMessage>;

    /// Returns every stored message, most recent first.
    async fn find_all_newest_first(&self) -> ContactStoreResult<Vec<ContactMessage>>;

    /// Finds a message by identifier.
    ///
    /// Returns `None` when no message has the given identifier.
    async fn find_by_id(&self, id: ContactMessageId) -> ContactStoreResult<Option<ContactMessage>>;

    /// Removes a message by identifier and returns the removed record.
    ///
    /// Returns `None` when no message has the given identifier.
    async fn delete_by_id(
        &self,
        id: ContactMessageId,
    ) -> ContactStoreResult<Option<ContactMessage>>;

    /// Returns the number of stored messages.
    async fn count(&self) -> ContactStoreResult<u64>;
}

/// Errors returned by contact store implementations.
#[derive(Debug, Clone, Error)]
pub enum ContactStoreError {
    /// The store refused the record on schema or constraint grounds.
    #[error("record rejected by store: {0}")]
    Rejected(String),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ContactStoreError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

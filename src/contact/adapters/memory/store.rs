//! In-memory contact message store.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::contact::{
    adapters::ReadinessCell,
    domain::{ContactMessage, ContactMessageId, NewContactMessage, StoreReadiness},
    ports::{ContactMessageStore, ContactStoreError, ContactStoreResult},
};

/// Thread-safe in-memory contact message store.
///
/// Messages are kept in insertion order. The readiness state starts as
/// [`StoreReadiness::Connected`] and can be changed to simulate an
/// unavailable database; it does not block reads or writes by itself.
#[derive(Debug, Clone)]
pub struct InMemoryContactStore {
    messages: Arc<RwLock<Vec<ContactMessage>>>,
    readiness: ReadinessCell,
}

impl InMemoryContactStore {
    /// Creates an empty, connected store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_readiness(StoreReadiness::Connected)
    }

    /// Creates an empty store in the given readiness state.
    #[must_use]
    pub fn with_readiness(readiness: StoreReadiness) -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
            readiness: ReadinessCell::new(readiness),
        }
    }

    /// Changes the reported readiness state.
    pub fn set_readiness(&self, readiness: StoreReadiness) {
        self.readiness.set(readiness);
    }
}

impl Default for InMemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error(err: &impl std::fmt::Display) -> ContactStoreError {
    ContactStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ContactMessageStore for InMemoryContactStore {
    fn readiness(&self) -> StoreReadiness {
        self.readiness.get()
    }

    async fn insert(&self, message: NewContactMessage) -> ContactStoreResult<ContactMessage> {
        let mut messages = self.messages.write().map_err(|err| lock_error(&err))?;
        let stored = message.with_id(ContactMessageId::new());
        messages.push(stored.clone());
        Ok(stored)
    }

    async fn find_all_newest_first(&self) -> ContactStoreResult<Vec<ContactMessage>> {
        let messages = self.messages.read().map_err(|err| lock_error(&err))?;
        // Later inserts win ties on equal timestamps.
        let mut newest_first: Vec<ContactMessage> = messages.iter().rev().cloned().collect();
        newest_first.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(newest_first)
    }

    async fn find_by_id(&self, id: ContactMessageId) -> ContactStoreResult<Option<ContactMessage>> {
        let messages = self.messages.read().map_err(|err| lock_error(&err))?;
        Ok(messages.iter().find(|m| m.id() == id).cloned())
    }

    async fn delete_by_id(
        &self,
        id: ContactMessageId,
    ) -> ContactStoreResult<Option<ContactMessage>> {
        let mut messages = self.messages.write().map_err(|err| lock_error(&err))?;
        let position = messages.iter().position(|m| m.id() == id);
        Ok(position.map(|index| messages.remove(index)))
    }

    async fn count(&self) -> ContactStoreResult<u64> {
        let messages = self.messages.read().map_err(|err| lock_error(&err))?;
        u64::try_from(messages.len()).map_err(ContactStoreError::persistence)
    }
}

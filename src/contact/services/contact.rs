//! Service layer for contact message submission, listing and deletion.
//!
//! Provides [`ContactService`], which validates submissions, checks the
//! store readiness gate and translates store failures into the caller-facing
//! [`ContactServiceError`] taxonomy.

use crate::contact::{
    domain::{
        ContactMessage, ContactMessageId, ContactSubmission, ContactValidationError,
        NewContactMessage, StoreReadiness,
    },
    ports::{ContactMessageStore, ContactStoreError},
};
use mockable::Clock;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Caller-facing classification of a service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactErrorKind {
    /// The input can be corrected by the caller.
    Validation,
    /// The store is not ready; retry later.
    ServiceUnavailable,
    /// No record has the requested identifier.
    NotFound,
    /// The store failed for reasons unrelated to the input.
    Persistence,
}

impl ContactErrorKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::ServiceUnavailable => "service_unavailable",
            Self::NotFound => "not_found",
            Self::Persistence => "persistence",
        }
    }
}

impl fmt::Display for ContactErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service-level errors for contact operations.
#[derive(Debug, Error)]
pub enum ContactServiceError {
    /// Input validation failed, either locally or in the store.
    #[error(transparent)]
    Validation(#[from] ContactValidationError),

    /// The store was not connected when the write was attempted.
    #[error("database connection not available: {}", .0.reason())]
    ServiceUnavailable(StoreReadiness),

    /// No message exists with the given identifier.
    #[error("message not found: {0}")]
    NotFound(String),

    /// The store failed while reading or writing.
    #[error(transparent)]
    Persistence(ContactStoreError),
}

impl ContactServiceError {
    /// Returns the caller-facing error kind.
    #[must_use]
    pub const fn kind(&self) -> ContactErrorKind {
        match self {
            Self::Validation(_) => ContactErrorKind::Validation,
            Self::ServiceUnavailable(_) => ContactErrorKind::ServiceUnavailable,
            Self::NotFound(_) => ContactErrorKind::NotFound,
            Self::Persistence(_) => ContactErrorKind::Persistence,
        }
    }
}

impl From<ContactStoreError> for ContactServiceError {
    fn from(err: ContactStoreError) -> Self {
        match err {
            ContactStoreError::Rejected(reason) => {
                Self::Validation(ContactValidationError::Rejected(reason))
            }
            other @ (ContactStoreError::InvalidPersistedData(_)
            | ContactStoreError::Persistence(_)) => Self::Persistence(other),
        }
    }
}

/// Result type for contact service operations.
pub type ContactServiceResult<T> = Result<T, ContactServiceError>;

/// Contact submission and management service.
///
/// Holds no mutable state of its own; every call goes to the store.
pub struct ContactService<S, C>
where
    S: ContactMessageStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> Clone for ContactService<S, C>
where
    S: ContactMessageStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S, C> ContactService<S, C>
where
    S: ContactMessageStore,
    C: Clock + Send + Sync,
{
    /// Creates a new contact service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Validates and stores a contact submission.
    ///
    /// The readiness check runs after validation and immediately before the
    /// write. It is advisory: the store may still fail the write if it
    /// disconnects in between.
    ///
    /// # Errors
    ///
    /// Returns [`ContactServiceError::Validation`] for missing, empty or
    /// malformed fields and for store-side rejections,
    /// [`ContactServiceError::ServiceUnavailable`] when the store is not
    /// connected, or [`ContactServiceError::Persistence`] when the write
    /// fails.
    pub async fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> ContactServiceResult<ContactMessage> {
        let details = submission.validate().map_err(|err| {
            debug!(error = %err, "contact submission failed validation");
            err
        })?;

        let readiness = self.store.readiness();
        if !readiness.is_ready() {
            warn!(
                state = readiness.code(),
                reason = readiness.reason(),
                "contact store not ready, rejecting submission"
            );
            return Err(ContactServiceError::ServiceUnavailable(readiness));
        }

        let pending = NewContactMessage::new(details, &*self.clock);
        let stored = self.store.insert(pending).await.map_err(|err| {
            warn!(error = %err, "failed to store contact submission");
            ContactServiceError::from(err)
        })?;

        info!(id = %stored.id(), "contact submission stored");
        Ok(stored)
    }

    /// Returns all stored messages, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`ContactServiceError::Persistence`] when the read fails.
    pub async fn list(&self) -> ContactServiceResult<Vec<ContactMessage>> {
        let messages = self.store.find_all_newest_first().await?;
        debug!(count = messages.len(), "fetched contact messages");
        Ok(messages)
    }

    /// Returns the message with the given identifier.
    ///
    /// Identifiers that do not parse are reported as not found.
    ///
    /// # Errors
    ///
    /// Returns [`ContactServiceError::NotFound`] when no message matches, or
    /// [`ContactServiceError::Persistence`] when the read fails.
    pub async fn get_by_id(&self, id: &str) -> ContactServiceResult<ContactMessage> {
        let message_id = parse_id(id)?;
        self.store
            .find_by_id(message_id)
            .await?
            .ok_or_else(|| ContactServiceError::NotFound(id.to_owned()))
    }

    /// Deletes the message with the given identifier and returns it.
    ///
    /// Deleting the same identifier twice reports not found the second time.
    ///
    /// # Errors
    ///
    /// Returns [`ContactServiceError::NotFound`] when no message matches, or
    /// [`ContactServiceError::Persistence`] when the delete fails.
    pub async fn delete_by_id(&self, id: &str) -> ContactServiceResult<ContactMessage> {
        let message_id = parse_id(id)?;
        let removed = self
            .store
            .delete_by_id(message_id)
            .await?
            .ok_or_else(|| ContactServiceError::NotFound(id.to_owned()))?;
        info!(id = %removed.id(), "contact message deleted");
        Ok(removed)
    }

    /// Returns the number of stored messages.
    ///
    /// # Errors
    ///
    /// Returns [`ContactServiceError::Persistence`] when the read fails.
    pub async fn count(&self) -> ContactServiceResult<u64> {
        Ok(self.store.count().await?)
    }

    /// Returns the store's current readiness state.
    #[must_use]
    pub fn readiness(&self) -> StoreReadiness {
        self.store.readiness()
    }
}

fn parse_id(id: &str) -> ContactServiceResult<ContactMessageId> {
    id.parse::<ContactMessageId>()
        .map_err(|_| ContactServiceError::NotFound(id.to_owned()))
}

//! Shared state handed to every HTTP handler.

use super::ApiError;
use crate::contact::{
    ports::ContactMessageStore,
    services::{ContactService, ContactServiceError},
};
use mockable::Clock;

/// Router state: the contact service plus response policy.
pub struct AppState<S, C>
where
    S: ContactMessageStore,
    C: Clock + Send + Sync,
{
    service: ContactService<S, C>,
    expose_error_details: bool,
}

impl<S, C> Clone for AppState<S, C>
where
    S: ContactMessageStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            expose_error_details: self.expose_error_details,
        }
    }
}

impl<S, C> AppState<S, C>
where
    S: ContactMessageStore,
    C: Clock + Send + Sync,
{
    /// Creates router state.
    ///
    /// When `expose_error_details` is `false`, persistence failures are
    /// reported without their internal message.
    #[must_use]
    pub const fn new(service: ContactService<S, C>, expose_error_details: bool) -> Self {
        Self {
            service,
            expose_error_details,
        }
    }

    /// Returns the contact service.
    #[must_use]
    pub const fn service(&self) -> &ContactService<S, C> {
        &self.service
    }

    /// Wraps a service failure for the HTTP response, using `context` as
    /// the client-facing message for internal failures.
    pub(super) const fn reject(
        &self,
        source: ContactServiceError,
        context: &'static str,
    ) -> ApiError {
        ApiError::Service {
            source,
            context,
            expose_details: self.expose_error_details,
        }
    }
}

//! HTTP error responses.

use crate::contact::{
    domain::{ContactField, ContactValidationError},
    services::{ContactErrorKind, ContactServiceError},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};
use thiserror::Error;
use tracing::error;

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body is not a JSON object of the expected shape.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// The contact service refused or failed the operation.
    #[error("{context}: {source}")]
    Service {
        /// Underlying service error.
        source: ContactServiceError,
        /// Client-facing message used for internal failures.
        context: &'static str,
        /// Whether the internal message may be sent to the client.
        expose_details: bool,
    },
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            Self::Service { source, .. } => match source.kind() {
                ContactErrorKind::Validation => StatusCode::BAD_REQUEST,
                ContactErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
                ContactErrorKind::NotFound => StatusCode::NOT_FOUND,
                ContactErrorKind::Persistence => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn body(&self) -> Value {
        match self {
            Self::MalformedPayload(reason) => json!({
                "error": "Malformed payload",
                "details": reason,
            }),
            Self::Service {
                source,
                context,
                expose_details,
            } => service_body(source, context, *expose_details),
        }
    }
}

fn service_body(source: &ContactServiceError, context: &str, expose_details: bool) -> Value {
    match source {
        ContactServiceError::Validation(ContactValidationError::MissingFields(missing)) => {
            let received: Map<String, Value> = ContactField::ALL
                .into_iter()
                .map(|field| (field.as_str().to_owned(), Value::Bool(!missing.contains(&field))))
                .collect();
            json!({
                "error": "All fields are required",
                "received": received,
            })
        }
        ContactServiceError::Validation(ContactValidationError::EmptyAfterTrim(_)) => json!({
            "error": "All fields must contain non-whitespace characters",
        }),
        ContactServiceError::Validation(ContactValidationError::InvalidEmail) => json!({
            "error": "Invalid email format",
        }),
        ContactServiceError::Validation(ContactValidationError::Rejected(reason)) => json!({
            "error": format!("Validation error: {reason}"),
        }),
        ContactServiceError::ServiceUnavailable(readiness) => json!({
            "error": "Database connection not available. Please try again later.",
            "details": readiness.reason(),
        }),
        ContactServiceError::NotFound(_) => json!({
            "error": "Message not found",
        }),
        ContactServiceError::Persistence(err) => {
            if expose_details {
                json!({ "error": context, "details": err.to_string() })
            } else {
                json!({ "error": context })
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "request failed");
        }
        (status, Json(self.body())).into_response()
    }
}

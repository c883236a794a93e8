//! Request body extraction for contact submissions.

use super::ApiError;
use crate::contact::domain::ContactSubmission;
use async_trait::async_trait;
use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use tracing::warn;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A contact submission read from a JSON or URL-encoded form body.
///
/// Form bodies are recognised by their `Content-Type`; every other body is
/// parsed as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPayload(pub ContactSubmission);

#[async_trait]
impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let outcome = if is_form(req.headers()) {
            Form::<ContactSubmission>::from_request(req, state)
                .await
                .map(|Form(submission)| submission)
                .map_err(|rejection| rejection.body_text())
        } else {
            Json::<ContactSubmission>::from_request(req, state)
                .await
                .map(|Json(submission)| submission)
                .map_err(|rejection| rejection.body_text())
        };

        outcome.map(Self).map_err(|reason| {
            warn!(error = %reason, "contact submission body rejected");
            ApiError::MalformedPayload(reason)
        })
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

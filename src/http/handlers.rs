//! Request handlers for the contact API.

use super::{ApiError, AppState, ContactPayload};
use crate::contact::{domain::ContactMessage, ports::ContactMessageStore};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mockable::Clock;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

/// Table name reported by the database check endpoint.
const COLLECTION_NAME: &str = "contact_messages";

/// Body of a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    /// Confirmation text.
    pub message: &'static str,
    /// The stored record.
    pub data: ContactMessage,
}

/// Body of a successful deletion.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Confirmation text.
    pub message: &'static str,
}

/// `GET /api/health`
pub async fn health<S, C>(State(state): State<AppState<S, C>>) -> Response
where
    S: ContactMessageStore,
    C: Clock + Send + Sync,
{
    Json(json!({
        "status": "Server is running",
        "database": state.service().readiness().as_str(),
    }))
    .into_response()
}

/// `GET /api/test-db`
pub async fn database_check<S, C>(State(state): State<AppState<S, C>>) -> Response
where
    S: ContactMessageStore,
    C: Clock + Send + Sync,
{
    match state.service().count().await {
        Ok(count) => Json(json!({
            "status": "Database connected",
            "messageCount": count,
            "collection": COLLECTION_NAME,
        }))
        .into_response(),
        Err(err) => {
            warn!(error = %err, "database check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "Database error",
                    "error": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}

/// `POST /api/contact`
///
/// Accepts JSON and URL-encoded form bodies.
pub async fn submit_contact<S, C>(
    State(state): State<AppState<S, C>>,
    ContactPayload(submission): ContactPayload,
) -> Result<(StatusCode, Json<SubmitResponse>), ApiError>
where
    S: ContactMessageStore,
    C: Clock + Send + Sync,
{
    info!("received contact form submission");

    let stored = state.service().submit(&submission).await.map_err(|err| {
        state.reject(err, "Failed to submit contact form. Please try again later.")
    })?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "Contact form submitted successfully",
            data: stored,
        }),
    ))
}

/// `GET /api/messages`
pub async fn list_messages<S, C>(
    State(state): State<AppState<S, C>>,
) -> Result<Json<Vec<ContactMessage>>, ApiError>
where
    S: ContactMessageStore,
    C: Clock + Send + Sync,
{
    let messages = state
        .service()
        .list()
        .await
        .map_err(|err| state.reject(err, "Failed to fetch messages"))?;
    Ok(Json(messages))
}

/// `GET /api/messages/{id}`
pub async fn get_message<S, C>(
    State(state): State<AppState<S, C>>,
    Path(id): Path<String>,
) -> Result<Json<ContactMessage>, ApiError>
where
    S: ContactMessageStore,
    C: Clock + Send + Sync,
{
    let message = state
        .service()
        .get_by_id(&id)
        .await
        .map_err(|err| state.reject(err, "Failed to fetch message"))?;
    Ok(Json(message))
}

/// `DELETE /api/messages/{id}`
pub async fn delete_message<S, C>(
    State(state): State<AppState<S, C>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError>
where
    S: ContactMessageStore,
    C: Clock + Send + Sync,
{
    state
        .service()
        .delete_by_id(&id)
        .await
        .map_err(|err| state.reject(err, "Failed to delete message"))?;
    Ok(Json(DeleteResponse {
        message: "Message deleted successfully",
    }))
}

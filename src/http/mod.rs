//! HTTP surface of the contact service.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/api/health` | [`handlers::health`] |
//! | GET | `/api/test-db` | [`handlers::database_check`] |
//! | POST | `/api/contact` | [`handlers::submit_contact`] |
//! | GET | `/api/messages` | [`handlers::list_messages`] |
//! | GET | `/api/messages/{id}` | [`handlers::get_message`] |
//! | DELETE | `/api/messages/{id}` | [`handlers::delete_message`] |

mod error;
mod extract;
pub mod handlers;
mod state;


pub use error::ApiError;
pub use extract::ContactPayload;
pub use state::AppState;

use crate::contact::ports::ContactMessageStore;
use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{get, post},
};
use handlers::{database_check, delete_message, get_message, health, list_messages, submit_contact};
use mockable::Clock;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Builds the API router with CORS and request tracing.
///
/// Request spans and response events are emitted at `INFO`.
pub fn router<S, C>(state: AppState<S, C>) -> Router
where
    S: ContactMessageStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .route("/api/health", get(health::<S, C>))
        .route("/api/test-db", get(database_check::<S, C>))
        .route("/api/contact", post(submit_contact::<S, C>))
        .route("/api/messages", get(list_messages::<S, C>))
        .route(
            "/api/messages/:id",
            get(get_message::<S, C>).delete(delete_message::<S, C>),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

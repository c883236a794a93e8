//! Runs the portfolio contact API.
//!
//! Usage:
//!
//! ```text
//! portfolio_server
//! ```
//!
//! Configuration is read from the environment, optionally seeded from a
//! `.env` file in the working directory. See [`portfolio_contact::config`]
//! for the recognised variables.
//!
//! The HTTP listener starts immediately; the database connects in the
//! background and submissions are refused with `503` until it is ready.
//! While the database is unreachable the connection is retried every few
//! seconds.

use std::sync::Arc;
use std::time::Duration;

use mockable::DefaultClock;
use portfolio_contact::{
    config::ServerConfig,
    contact::{
        adapters::postgres::PostgresContactStore, ports::ContactMessageStore,
        services::ContactService,
    },
    http::{AppState, router},
    telemetry::{init_tracing, redact_credentials},
};
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tracing::{debug, error, info, warn};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Delay before the startup readiness report is logged.
const READINESS_REPORT_DELAY: Duration = Duration::from_secs(2);

/// Pause between reconnection attempts while the database is unreachable.
const RECONNECT_INTERVAL: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let dotenv = dotenvy::dotenv();
    init_tracing()?;
    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded environment file"),
        Err(err) if err.not_found() => debug!("no .env file found"),
        Err(err) => warn!(error = %err, "failed to load .env file"),
    }

    let config = ServerConfig::from_env()?;
    info!(
        database = %redact_credentials(&config.store.database_url),
        environment = ?config.environment,
        "starting portfolio contact server"
    );

    let store = Arc::new(PostgresContactStore::new(&config.store));
    spawn_connect(Arc::clone(&store));

    let service = ContactService::new(Arc::clone(&store), Arc::new(DefaultClock));
    let app = router(AppState::new(service, config.expose_error_details()));

    let address = config.socket_address();
    let listener = TcpListener::bind(address).await?;
    info!(%address, "server listening");
    spawn_readiness_report(Arc::clone(&store));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutting down");
    store.close().await?;
    Ok(())
}

fn spawn_connect(store: Arc<PostgresContactStore>) {
    tokio::spawn(async move {
        if let Err(err) = store.connect().await {
            error!(error = %err, "contact database connection failed");
            warn!(
                "check that DATABASE_URL is set and correct, that the database \
                 server is running and reachable from this host, and that the \
                 credentials are accepted"
            );
        }
        store.maintain_connection(RECONNECT_INTERVAL).await;
    });
}

fn spawn_readiness_report(store: Arc<PostgresContactStore>) {
    tokio::spawn(async move {
        tokio::time::sleep(READINESS_REPORT_DELAY).await;
        let readiness = store.readiness();
        if readiness.is_ready() {
            info!(state = %readiness, "contact database ready");
        } else {
            warn!(state = %readiness, reason = readiness.reason(), "contact database not ready");
        }
    });
}

async fn shutdown_signal() {
    let interrupt = async {
        match ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(err) => {
                warn!(error = %err, "failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(err) => {
                warn!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => {},
        () = terminate => {},
    }
}

//! Logging setup and log-safe formatting helpers.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .try_init()
}

/// Replaces the user-info part of a connection URL with `***:***`.
///
/// Everything between `//` and the last `@` is masked. URLs without
/// credentials are returned unchanged.
#[must_use]
pub fn redact_credentials(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("//") else {
        return url.to_owned();
    };
    rest.rsplit_once('@').map_or_else(
        || url.to_owned(),
        |(_, host)| format!("{scheme}//***:***@{host}"),
    )
}

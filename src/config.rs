//! Server configuration loaded from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `PORT` | `5000` |
//! | `BIND_ADDRESS` | `0.0.0.0` |
//! | `DATABASE_URL` | `postgres://localhost:5432/portfolio` |
//! | `DATABASE_MAX_CONNECTIONS` | `10` |
//! | `DATABASE_CONNECT_TIMEOUT_MS` | `5000` |
//! | `APP_ENV` | `production` |

use crate::contact::adapters::postgres::PostgresStoreSettings;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/portfolio";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5000;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but cannot be used.
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Raw value as found in the environment.
        value: String,
        /// Why the value was refused.
        reason: String,
    },
}

/// Deployment environment; controls how much error detail clients see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Internal error messages are included in HTTP responses.
    Development,
    /// Internal error messages are withheld from HTTP responses.
    #[default]
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!(
                "unknown environment '{other}'; expected development or production"
            )),
        }
    }
}

/// Complete configuration for the portfolio server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_address: IpAddr,
    /// Port the HTTP listener binds to.
    pub port: u16,
    /// Contact store connection settings.
    pub store: PostgresStoreSettings,
    /// Deployment environment.
    pub environment: Environment,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first unusable variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value. Unset and blank variables take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first unusable variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let bind_address = parse_or(&lookup, "BIND_ADDRESS", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let database_url =
            value_of(&lookup, "DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());
        let max_connections =
            parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let timeout_ms = parse_or(
            &lookup,
            "DATABASE_CONNECT_TIMEOUT_MS",
            DEFAULT_CONNECT_TIMEOUT_MS,
        )?;
        let environment = parse_or(&lookup, "APP_ENV", Environment::default())?;

        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                value: max_connections.to_string(),
                reason: "must be at least 1".to_owned(),
            });
        }
        if timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_CONNECT_TIMEOUT_MS",
                value: timeout_ms.to_string(),
                reason: "must be at least 1".to_owned(),
            });
        }

        Ok(Self {
            bind_address,
            port,
            store: PostgresStoreSettings {
                database_url,
                max_connections,
                connect_timeout: Duration::from_millis(timeout_ms),
            },
            environment,
        })
    }

    /// Returns the socket address for the HTTP listener.
    #[must_use]
    pub const fn socket_address(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    /// Returns `true` when internal error detail may be sent to clients.
    #[must_use]
    pub const fn expose_error_details(&self) -> bool {
        matches!(self.environment, Environment::Development)
    }
}

fn value_of(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|raw| raw.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(value) = value_of(lookup, key) else {
        debug!(key, "not set, using default");
        return Ok(default);
    };
    let parsed = value.parse::<T>();
    parsed.map_err(|err| ConfigError::Invalid {
        key,
        reason: err.to_string(),
        value,
    })
}

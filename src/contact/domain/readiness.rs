//! Connection readiness states reported by a message store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection state of the message store.
///
/// Only [`StoreReadiness::Connected`] accepts writes. The numeric codes
/// follow the convention of connection-oriented database clients and are
/// used in log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreReadiness {
    /// No connection is open.
    Disconnected,
    /// The store is connected and ready.
    Connected,
    /// A connection attempt is in progress.
    Connecting,
    /// Connections are being released.
    Disconnecting,
}

impl StoreReadiness {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connected => "connected",
            Self::Connecting => "connecting",
            Self::Disconnecting => "disconnecting",
        }
    }

    /// Returns the numeric state code (0 disconnected, 1 connected,
    /// 2 connecting, 3 disconnecting).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Disconnected => 0,
            Self::Connected => 1,
            Self::Connecting => 2,
            Self::Disconnecting => 3,
        }
    }

    /// Parses a numeric state code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Disconnected),
            1 => Some(Self::Connected),
            2 => Some(Self::Connecting),
            3 => Some(Self::Disconnecting),
            _ => None,
        }
    }

    /// Returns `true` when the store accepts writes.
    #[must_use]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Returns a human-readable explanation of the state.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Disconnected => "Disconnected - the database is not connected",
            Self::Connected => "Connected - the database is ready",
            Self::Connecting => "Connecting - the database is still connecting, please wait",
            Self::Disconnecting => "Disconnecting - the database is disconnecting",
        }
    }
}

impl fmt::Display for StoreReadiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

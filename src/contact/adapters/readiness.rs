//! Shared, lock-free readiness state for store adapters.

use crate::contact::domain::StoreReadiness;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// Cloneable handle to a store's current [`StoreReadiness`].
///
/// Clones observe and update the same state.
#[derive(Debug, Clone)]
pub struct ReadinessCell {
    code: Arc<AtomicU8>,
}

impl ReadinessCell {
    /// Creates a cell holding `initial`.
    #[must_use]
    pub fn new(initial: StoreReadiness) -> Self {
        Self {
            code: Arc::new(AtomicU8::new(initial.code())),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn get(&self) -> StoreReadiness {
        StoreReadiness::from_code(self.code.load(Ordering::Acquire))
            .unwrap_or(StoreReadiness::Disconnected)
    }

    /// Replaces the state and returns the previous one.
    pub fn set(&self, next: StoreReadiness) -> StoreReadiness {
        StoreReadiness::from_code(self.code.swap(next.code(), Ordering::AcqRel))
            .unwrap_or(StoreReadiness::Disconnected)
    }

    /// Moves from `from` to `to` only if the current state is `from`.
    ///
    /// Returns `true` when the transition happened.
    pub fn transition(&self, from: StoreReadiness, to: StoreReadiness) -> bool {
        self.code
            .compare_exchange(from.code(), to.code(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl Default for ReadinessCell {
    fn default() -> Self {
        Self::new(StoreReadiness::Disconnected)
    }
}

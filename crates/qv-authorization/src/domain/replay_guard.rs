//! # Replay Guard
//!
//! Strictly-increasing counter binding every authorized message to exactly
//! one use. Incremented by exactly 1 per admitted action, never decremented,
//! never reset.

use serde::{Deserialize, Serialize};

/// Monotonic nonce counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayGuard {
    nonce: u64,
}

impl ReplayGuard {
    /// Create a guard starting at nonce 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// The nonce the next admitted action must embed.
    pub fn current(&self) -> u64 {
        self.nonce
    }

    /// Consume the current nonce.
    ///
    /// Called exactly once per admitted action, after quorum validation and
    /// before dispatch is attempted.
    pub fn advance(&mut self) {
        self.nonce += 1;
    }
}

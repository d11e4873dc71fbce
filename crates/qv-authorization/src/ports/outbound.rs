//! # Outbound Ports (Driven Ports / SPI)
//!
//! Traits that define dependencies this subsystem needs.

use shared_types::{Address, U256};
use thiserror::Error;

/// Error reported by a dispatch target.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The target rejected or reverted the call.
    #[error("Target rejected the call: {0}")]
    Rejected(String),

    /// The target could not be reached.
    #[error("Target unreachable")]
    Unreachable,
}

/// Capability to forward value and an opaque payload to a target.
///
/// The engine treats every target as an opaque callee: `send` receives
/// `(address, amount, payload)` and reports success or failure. A failing
/// dispatcher can never roll back engine state; the nonce commit has
/// already happened by the time `send` runs.
pub trait Dispatcher {
    /// Deliver `value` and `payload` to `target`.
    ///
    /// Returns whatever bytes the target produced.
    fn send(&mut self, target: Address, value: U256, payload: &[u8])
        -> Result<Vec<u8>, DispatchError>;
}

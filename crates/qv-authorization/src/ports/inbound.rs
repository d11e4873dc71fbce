//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use shared_types::{Address, U256};

use crate::domain::entities::{DispatchReceipt, SignatureSet};
use crate::domain::errors::EngineError;

/// Primary authorization API.
///
/// One action is authorized and dispatched per `execute` call. All mutation
/// goes through `&mut self`, which is what serializes the engine: the nonce
/// read and the nonce commit can never interleave across two callers.
pub trait AuthorizationApi {
    /// Authorize and dispatch one action.
    ///
    /// The signatures must cover the canonical message for the engine's
    /// current nonce, and the recovered signers must meet quorum in strict
    /// ascending identity order. On admission the nonce is consumed before
    /// dispatch is attempted; a failed dispatch reports
    /// [`EngineError::DispatchFailed`] and does NOT refund the nonce.
    fn execute(
        &mut self,
        signatures: SignatureSet,
        target: Address,
        value: U256,
        payload: Vec<u8>,
    ) -> Result<DispatchReceipt, EngineError>;

    /// Replace the owner configuration.
    ///
    /// Callable only through the engine's own execute path (a self-targeted
    /// action); any other `caller` is rejected with
    /// [`EngineError::Unauthorized`].
    fn set_owners(
        &mut self,
        caller: Address,
        new_threshold: usize,
        new_owners: Vec<Address>,
    ) -> Result<(), EngineError>;

    /// The nonce the next action must embed.
    fn current_nonce(&self) -> u64;

    /// Owner identity at `index`, in insertion order.
    fn owner_at(&self, index: usize) -> Option<Address>;

    /// Number of owners.
    fn owner_count(&self) -> usize;

    /// Quorum threshold.
    fn threshold(&self) -> usize;
}

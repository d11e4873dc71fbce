//! # Authorization Engine
//!
//! Application service composing the domain pieces into the per-call state
//! machine:
//!
//! ```text
//! RECEIVED → HASHED → SIGNATURES_RECOVERED → QUORUM_CHECKED
//!          → NONCE_COMMITTED → DISPATCHED → (SUCCESS | DISPATCH_FAILED)
//! ```
//!
//! Any validation failure before `NONCE_COMMITTED` rejects the call with
//! all state unchanged. The nonce commit happens before dispatch is
//! attempted; a failed dispatch never rolls it back, so a wasted nonce on a
//! failed send is the accepted cost of making failing actions
//! non-replayable.

use shared_types::{short_hex, Address, U256};
use tracing::{debug, info, instrument, warn};

use qv_signature_verification::recover_signer;

use crate::domain::entities::{Action, AdminCall, DispatchReceipt, SignatureSet};
use crate::domain::errors::EngineError;
use crate::domain::owner_set::OwnerSet;
use crate::domain::replay_guard::ReplayGuard;
use crate::ports::inbound::AuthorizationApi;
use crate::ports::outbound::Dispatcher;

/// The authorization engine: sole owner and sole mutator of the owner set
/// and the replay guard.
///
/// One action executes to completion (or rejection) before the next begins;
/// `&mut self` on every mutator is what enforces the single-writer
/// discipline. A concurrent host must hold one mutual-exclusion scope per
/// engine instance across the whole of [`AuthorizationEngine::execute`] so
/// that each nonce value authorizes at most one action.
pub struct AuthorizationEngine<D: Dispatcher> {
    /// This instance's own identity; part of every signed message.
    identity: Address,
    owners: OwnerSet,
    replay: ReplayGuard,
    dispatcher: D,
}

impl<D: Dispatcher> AuthorizationEngine<D> {
    /// Create an engine with an initial owner configuration.
    ///
    /// Fails with [`EngineError::InvalidOwnerConfiguration`] and no partial
    /// state unless `1 <= threshold <= owners.len() <= MAX_OWNERS` and the
    /// owner list is duplicate-free.
    pub fn new(
        threshold: usize,
        owners: Vec<Address>,
        identity: Address,
        dispatcher: D,
    ) -> Result<Self, EngineError> {
        let owners = OwnerSet::new(threshold, owners)?;
        info!(
            identity = %short_hex(&identity),
            owner_count = owners.owner_count(),
            threshold = owners.threshold(),
            "authorization engine created"
        );
        Ok(Self {
            identity,
            owners,
            replay: ReplayGuard::new(),
            dispatcher,
        })
    }

    /// This engine's own identity.
    pub fn identity(&self) -> Address {
        self.identity
    }

    /// Borrow the dispatcher, e.g. to inspect an in-memory ledger.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Authorize and dispatch one action. See [`AuthorizationApi::execute`].
    #[instrument(skip_all)]
    pub fn execute(
        &mut self,
        signatures: SignatureSet,
        target: Address,
        value: U256,
        payload: Vec<u8>,
    ) -> Result<DispatchReceipt, EngineError> {
        let nonce = self.replay.current();
        let action = Action {
            target,
            value,
            payload,
            nonce,
        };
        let message_hash = action.hash(&self.identity);
        debug!(
            nonce,
            target = %short_hex(&target),
            signature_count = signatures.len(),
            "validating action"
        );

        // Recover each signer in submission order; one bad signature
        // rejects the whole call before any state is touched
        let mut signers = Vec::with_capacity(signatures.len());
        for signature in signatures.iter() {
            let signer = recover_signer(&message_hash, signature)?;
            signers.push(signer);
        }

        // Membership, strict ascending order, and minimum count in one check
        if !self.owners.quorum_met(&signers) {
            warn!(nonce, target = %short_hex(&target), "quorum not met");
            return Err(EngineError::QuorumNotMet);
        }

        // Commit point: from here on the nonce is consumed, whatever the
        // dispatch outcome
        self.replay.advance();

        let return_data = if action.target == self.identity {
            self.dispatch_admin(&action.payload)?
        } else {
            self.dispatcher
                .send(action.target, action.value, &action.payload)
                .map_err(|e| {
                    warn!(nonce, target = %short_hex(&target), error = %e, "dispatch failed");
                    EngineError::DispatchFailed {
                        reason: e.to_string(),
                    }
                })?
        };

        info!(nonce, target = %short_hex(&target), "action dispatched");
        Ok(DispatchReceipt {
            nonce_used: nonce,
            return_data,
        })
    }

    /// Route a self-targeted payload to the administrative handler.
    ///
    /// Runs after the nonce commit: a payload that fails to decode, or a
    /// replacement that fails validation, still consumes the nonce.
    fn dispatch_admin(&mut self, payload: &[u8]) -> Result<Vec<u8>, EngineError> {
        let call = AdminCall::decode(payload).map_err(|e| EngineError::DispatchFailed {
            reason: format!("undecodable administrative payload: {}", e),
        })?;

        match call {
            AdminCall::SetOwners { threshold, owners } => {
                self.owners.replace(threshold, owners)?;
                info!(
                    owner_count = self.owners.owner_count(),
                    threshold = self.owners.threshold(),
                    "owner set replaced"
                );
                Ok(Vec::new())
            }
        }
    }
}

impl<D: Dispatcher> AuthorizationApi for AuthorizationEngine<D> {
    fn execute(
        &mut self,
        signatures: SignatureSet,
        target: Address,
        value: U256,
        payload: Vec<u8>,
    ) -> Result<DispatchReceipt, EngineError> {
        AuthorizationEngine::execute(self, signatures, target, value, payload)
    }

    fn set_owners(
        &mut self,
        caller: Address,
        new_threshold: usize,
        new_owners: Vec<Address>,
    ) -> Result<(), EngineError> {
        // Only the engine itself may replace its owners; external callers
        // must go through the quorum path
        if caller != self.identity {
            warn!(caller = %short_hex(&caller), "direct owner replacement rejected");
            return Err(EngineError::Unauthorized);
        }
        self.owners.replace(new_threshold, new_owners)
    }

    fn current_nonce(&self) -> u64 {
        self.replay.current()
    }

    fn owner_at(&self, index: usize) -> Option<Address> {
        self.owners.owner_at(index)
    }

    fn owner_count(&self) -> usize {
        self.owners.owner_count()
    }

    fn threshold(&self) -> usize {
        self.owners.threshold()
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

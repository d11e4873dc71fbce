//! # Domain Entities
//!
//! Ephemeral values flowing through one authorization call. None of these
//! persist past the call that created them.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash, U256};

use qv_signature_verification::{RecoverableSignature, SignatureError};

use super::errors::EngineError;
use super::message;

/// One candidate action: a dispatch the owners are asked to authorize.
///
/// The embedded nonce must equal the engine's current replay-guard value,
/// or the recovered signers will not match any owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Dispatch target.
    pub target: Address,
    /// Value to transfer.
    pub value: U256,
    /// Opaque payload forwarded to the target.
    pub payload: Vec<u8>,
    /// The replay-guard value this action is bound to.
    pub nonce: u64,
}

impl Action {
    /// The hash owners sign for this action, bound to `engine`.
    pub fn hash(&self, engine: &Address) -> Hash {
        message::action_hash(engine, &self.target, self.value, &self.payload, self.nonce)
    }
}

/// Ordered sequence of recoverable signatures, one per claimed signer.
///
/// Assembled from the three positional wire arrays `(v[i], r[i], s[i])`;
/// a length mismatch between them is rejected before any recovery work.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureSet {
    signatures: Vec<RecoverableSignature>,
}

impl SignatureSet {
    /// Assemble from positional component arrays.
    pub fn from_parts(
        sig_v: &[u8],
        sig_r: &[[u8; 32]],
        sig_s: &[[u8; 32]],
    ) -> Result<Self, EngineError> {
        if sig_v.len() != sig_r.len() || sig_v.len() != sig_s.len() {
            return Err(EngineError::InvalidSignature(SignatureError::InvalidFormat));
        }

        let signatures = sig_v
            .iter()
            .zip(sig_r)
            .zip(sig_s)
            .map(|((&v, &r), &s)| RecoverableSignature::new(v, r, s))
            .collect();

        Ok(Self { signatures })
    }

    /// Number of signatures.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Iterate in submission order.
    pub fn iter(&self) -> impl Iterator<Item = &RecoverableSignature> {
        self.signatures.iter()
    }
}

impl From<Vec<RecoverableSignature>> for SignatureSet {
    fn from(signatures: Vec<RecoverableSignature>) -> Self {
        Self { signatures }
    }
}

/// Administrative call carried in a self-targeted payload.
///
/// When an authorized action targets the engine's own identity, the payload
/// is decoded into this enum and routed to the internal handler instead of
/// the outbound dispatcher, keeping one authorization path for both value
/// transfers and governance changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminCall {
    /// Replace the owner list and threshold wholesale.
    SetOwners {
        /// New quorum threshold.
        threshold: usize,
        /// New owner identities.
        owners: Vec<Address>,
    },
}

impl AdminCall {
    /// Encode for embedding in an action payload.
    pub fn encode(&self) -> Vec<u8> {
        bincode::serialize(self).unwrap_or_default()
    }

    /// Decode from a self-targeted action payload.
    pub fn decode(payload: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(payload)
    }
}

/// Outcome of an admitted, dispatched action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReceipt {
    /// The nonce this action consumed.
    pub nonce_used: u64,
    /// Whatever the dispatched call returned.
    pub return_data: Vec<u8>,
}

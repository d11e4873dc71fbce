//! # Domain Entities
//!
//! Core data structures for signature recovery.

use serde::{Deserialize, Serialize};

/// Recoverable ECDSA signature on the secp256k1 curve.
///
/// The recovery id `v` selects which of the candidate public keys produced
/// the signature, so the signer's address can be derived without being
/// transmitted alongside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoverableSignature {
    /// R component (32 bytes, big-endian scalar)
    pub r: [u8; 32],
    /// S component (32 bytes, big-endian scalar)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

impl RecoverableSignature {
    /// Assemble a signature from its wire components.
    pub fn new(v: u8, r: [u8; 32], s: [u8; 32]) -> Self {
        Self { r, s, v }
    }
}

//! # Canonical Message Format
//!
//! The byte layout every signer commits to. Must stay bit-exact for
//! cross-implementation signature compatibility:
//!
//! ```text
//! 0x19 || 0x00 || engine(20) || target(20) || value(32 BE) || payload || nonce(32 BE)
//! ```
//!
//! hashed with Keccak-256. Embedding the engine's own address binds
//! signatures to one instance; embedding the nonce binds them to one use.

use qv_signature_verification::keccak256;
use shared_types::{Address, Hash, U256};

/// Domain-separation prefix byte.
pub const MESSAGE_PREFIX: u8 = 0x19;

/// Message version byte.
pub const MESSAGE_VERSION: u8 = 0x00;

/// Build the canonical preimage for an action.
pub fn canonical_preimage(
    engine: &Address,
    target: &Address,
    value: U256,
    payload: &[u8],
    nonce: u64,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + 20 + 20 + 32 + payload.len() + 32);
    out.push(MESSAGE_PREFIX);
    out.push(MESSAGE_VERSION);
    out.extend_from_slice(engine);
    out.extend_from_slice(target);

    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    out.extend_from_slice(&word);

    out.extend_from_slice(payload);

    U256::from(nonce).to_big_endian(&mut word);
    out.extend_from_slice(&word);

    out
}

/// Keccak-256 hash of the canonical preimage; this is what owners sign.
pub fn action_hash(
    engine: &Address,
    target: &Address,
    value: U256,
    payload: &[u8],
    nonce: u64,
) -> Hash {
    keccak256(&canonical_preimage(engine, target, value, payload, nonce))
}

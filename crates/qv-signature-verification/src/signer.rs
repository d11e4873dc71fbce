//! # Owner Keypair
//!
//! secp256k1 keypair for owners producing recoverable signatures.
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S normalization (EIP-2), with the recovery id fixed up to match
//! - Secret key material zeroized on drop

use k256::ecdsa::SigningKey;
use shared_types::{Address, Hash};
use zeroize::Zeroize;

use crate::domain::ecdsa::{address_from_pubkey, invert_s, s_is_low};
use crate::domain::entities::RecoverableSignature;
use crate::domain::errors::SignatureError;

/// secp256k1 keypair held by an owner.
#[derive(Debug)]
pub struct OwnerKeyPair {
    signing_key: SigningKey,
}

impl OwnerKeyPair {
    /// Generate a random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, SignatureError> {
        let signing_key = SigningKey::from_bytes((&bytes).into())
            .map_err(|_| SignatureError::InvalidSecretKey)?;
        Ok(Self { signing_key })
    }

    /// The account address this keypair signs for.
    pub fn address(&self) -> Address {
        address_from_pubkey(self.signing_key.verifying_key())
    }

    /// Sign a 32-byte message hash, producing a recoverable signature.
    ///
    /// The signature is normalized to its low-S encoding and the recovery
    /// id adjusted accordingly, so the result always passes the verifier's
    /// malleability check. The returned `v` is in `{27, 28}`.
    pub fn sign_prehash(&self, message_hash: &Hash) -> RecoverableSignature {
        // Signing a 32-byte prehash with a valid key cannot fail in k256;
        // the Result exists for variable-length digest inputs
        let (sig, recid) = self
            .signing_key
            .sign_prehash_recoverable(message_hash)
            .expect("prehash has fixed 32-byte length");

        let sig_bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&sig_bytes[..32]);
        s.copy_from_slice(&sig_bytes[32..]);

        // Normalize S to its low encoding (EIP-2)
        let s_normalized = if !s_is_low(&s) { invert_s(&s) } else { s };

        // Flipping S flips the parity of the recovered point
        let v = if s_normalized != s {
            if recid.to_byte() == 0 {
                28
            } else {
                27
            }
        } else {
            recid.to_byte() + 27
        };

        RecoverableSignature {
            r,
            s: s_normalized,
            v,
        }
    }

    /// Get secret key bytes (for serialization).
    pub fn to_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes().into()
    }
}

impl Drop for OwnerKeyPair {
    fn drop(&mut self) {
        let mut bytes: [u8; 32] = self.signing_key.to_bytes().into();
        bytes.zeroize();
    }
}

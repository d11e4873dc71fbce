//! # Signature Errors
//!
//! Error types for signature recovery operations.

use thiserror::Error;

/// Errors that can occur while recovering a signer from a signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The signature components are out of range or not a valid encoding
    #[error("Invalid signature format")]
    InvalidFormat,

    /// Signature has high S value (EIP-2 malleability protection)
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// Failed to recover a public key from the signature
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// The provided secret key bytes do not form a valid scalar
    #[error("Invalid secret key")]
    InvalidSecretKey,
}

//! # Signature Verification Subsystem
//!
//! Recovers signer identities from recoverable secp256k1 signatures for the
//! Quorum-Vault authorization engine.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure cryptographic logic, no I/O
//! - **Signer** (`signer.rs`): Keypair handling for owners producing
//!   recoverable signatures
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: Signatures with high S values are
//!   rejected, so each message admits exactly one signature encoding per key
//! - **Range Validation**: R and S must be in `[1, n-1]`; R must be a valid
//!   curve x-coordinate
//! - **No Panics**: Malformed input yields a classified error, never a crash

pub mod domain;
pub mod signer;

// Re-export public API
pub use domain::ecdsa::{address_from_pubkey, invert_s, keccak256, recover_signer};
pub use domain::entities::RecoverableSignature;
pub use domain::errors::SignatureError;
pub use signer::OwnerKeyPair;

//! # Core Domain Entities
//!
//! Defines the primitive identity and value types used by the authorization
//! engine and the signature verification crate.

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

/// A 32-byte Keccak-256 hash.
pub type Hash = [u8; 32];

/// A 20-byte account address (last 20 bytes of keccak256(pubkey)).
///
/// All signer identities and dispatch targets use this type. The derived
/// `Ord` on the underlying array is the canonical total order over
/// identities: lexicographic over big-endian bytes, i.e. numeric order.
pub type Address = [u8; 20];

/// The all-zero address.
pub const ZERO_ADDRESS: Address = [0u8; 20];

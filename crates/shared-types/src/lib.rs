//! # Shared Types Crate
//!
//! This crate contains the domain primitives shared across the Quorum-Vault
//! subsystem crates: the `Address`/`Hash` vocabulary, the `U256` value type,
//! and hex rendering helpers used by log output.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Byte-Exact Identity**: Addresses are plain `[u8; 20]` values; equality
//!   and ordering are the byte-lexicographic order of the array, which for
//!   fixed-width big-endian data coincides with numeric order.

pub mod encoding;
pub mod entities;

pub use encoding::*;
pub use entities::*;

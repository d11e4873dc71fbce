//! # Authorization Subsystem
//!
//! The core of Quorum-Vault: a set of designated owners jointly controls
//! outgoing value transfers and opaque calls. Every action requires a quorum
//! of valid, distinct, canonically-ordered signatures over a replay-protected
//! message.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Owner set, replay guard, canonical
//!   message format. Pure logic, no I/O
//! - **Ports Layer** (`ports/`): The inbound [`AuthorizationApi`] and the
//!   outbound [`Dispatcher`] capability
//! - **Adapters** (`adapters/`): In-memory ledger dispatcher
//! - **Service Layer** (`service.rs`): The [`AuthorizationEngine`] state
//!   machine wiring domain logic to the ports
//!
//! ## Authorization flow
//!
//! ```text
//! caller ──(sigs, target, value, payload)──→ AuthorizationEngine
//!     build canonical message ──→ keccak256
//!     recover each signer      ──→ qv-signature-verification
//!     membership/order/quorum  ──→ OwnerSet
//!     nonce check + commit     ──→ ReplayGuard
//!     dispatch                 ──→ Dispatcher (or internal admin handler)
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::ledger::{DispatchRecord, LedgerDispatcher};
pub use domain::entities::{Action, AdminCall, DispatchReceipt, SignatureSet};
pub use domain::errors::EngineError;
pub use domain::message::{action_hash, canonical_preimage};
pub use domain::owner_set::{OwnerSet, MAX_OWNERS};
pub use domain::replay_guard::ReplayGuard;
pub use ports::inbound::AuthorizationApi;
pub use ports::outbound::{DispatchError, Dispatcher};
pub use service::AuthorizationEngine;

//! # Engine Errors
//!
//! Error taxonomy for the authorization engine. Every rejected call surfaces
//! one of these classes; there is no generic catch-all.

use qv_signature_verification::SignatureError;
use thiserror::Error;

/// Errors produced by the authorization engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A supplied signature is malformed or unrecoverable.
    ///
    /// Raised before the nonce commit; state is untouched.
    #[error("Invalid signature: {0}")]
    InvalidSignature(#[from] SignatureError),

    /// Insufficient, unordered, duplicate, or non-owner signers.
    ///
    /// All membership and ordering violations collapse into this class;
    /// raised before the nonce commit, state untouched.
    #[error("Quorum not met")]
    QuorumNotMet,

    /// Bad threshold/owner-list on construction or replacement.
    #[error("Invalid owner configuration: {reason}")]
    InvalidOwnerConfiguration {
        /// Which bound was violated
        reason: String,
    },

    /// A privileged call was attempted outside the quorum path.
    #[error("Unauthorized")]
    Unauthorized,

    /// The downstream call failed after the nonce commit.
    ///
    /// The nonce remains consumed; the action is NOT retryable with the
    /// same signatures.
    #[error("Dispatch failed: {reason}")]
    DispatchFailed {
        /// Reason reported by the dispatcher
        reason: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidOwnerConfiguration`].
    pub(crate) fn bad_config(reason: impl Into<String>) -> Self {
        Self::InvalidOwnerConfiguration {
            reason: reason.into(),
        }
    }
}

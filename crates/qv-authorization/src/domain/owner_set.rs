//! # Owner Set
//!
//! Holds the authorized signer identities and the quorum threshold.
//!
//! ## Invariants
//!
//! - `1 <= threshold <= owners.len() <= MAX_OWNERS`
//! - no duplicate identities
//! - mutated wholesale (full replace) only; never partially edited

use serde::{Deserialize, Serialize};
use shared_types::Address;

use super::errors::EngineError;

/// Hard cap on the number of owners, bounding verification cost per action.
pub const MAX_OWNERS: usize = 10;

/// The authorized signer identities and the quorum threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSet {
    owners: Vec<Address>,
    threshold: usize,
}

impl OwnerSet {
    /// Create an owner set, validating the full configuration.
    ///
    /// Fails with [`EngineError::InvalidOwnerConfiguration`] and no partial
    /// state on any bound violation.
    pub fn new(threshold: usize, owners: Vec<Address>) -> Result<Self, EngineError> {
        validate_configuration(threshold, &owners)?;
        Ok(Self { owners, threshold })
    }

    /// Whether the identity is an owner.
    pub fn contains(&self, identity: &Address) -> bool {
        self.owners.contains(identity)
    }

    /// Decide whether a candidate signer sequence meets quorum.
    ///
    /// True iff every candidate is an owner, the sequence is strictly
    /// ascending in the canonical identity order, and at least `threshold`
    /// candidates are present. The strict-ascending scan enforces
    /// uniqueness and canonical order in one O(n) pass, so a submission has
    /// exactly one admissible encoding.
    ///
    /// Quorum is a minimum, not an exact count: extra valid, sorted signers
    /// beyond the threshold are accepted.
    pub fn quorum_met(&self, candidates: &[Address]) -> bool {
        if candidates.len() < self.threshold {
            return false;
        }

        let mut previous: Option<&Address> = None;
        for candidate in candidates {
            if !self.contains(candidate) {
                return false;
            }
            if let Some(prev) = previous {
                if candidate <= prev {
                    return false;
                }
            }
            previous = Some(candidate);
        }

        true
    }

    /// Atomically replace the owner list and threshold.
    ///
    /// The new configuration is validated against the same bounds as
    /// construction; on violation the current set is left untouched.
    pub fn replace(&mut self, new_threshold: usize, new_owners: Vec<Address>) -> Result<(), EngineError> {
        validate_configuration(new_threshold, &new_owners)?;
        self.owners = new_owners;
        self.threshold = new_threshold;
        Ok(())
    }

    /// Owner identity at `index`, in insertion order.
    pub fn owner_at(&self, index: usize) -> Option<Address> {
        self.owners.get(index).copied()
    }

    /// Number of owners.
    pub fn owner_count(&self) -> usize {
        self.owners.len()
    }

    /// Quorum threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

/// Validate an owner-set configuration against the engine bounds.
fn validate_configuration(threshold: usize, owners: &[Address]) -> Result<(), EngineError> {
    if owners.is_empty() {
        return Err(EngineError::bad_config("owner list is empty"));
    }
    if owners.len() > MAX_OWNERS {
        return Err(EngineError::bad_config(format!(
            "{} owners exceeds the cap of {}",
            owners.len(),
            MAX_OWNERS
        )));
    }
    if threshold < 1 || threshold > owners.len() {
        return Err(EngineError::bad_config(format!(
            "threshold {} outside 1..={}",
            threshold,
            owners.len()
        )));
    }
    for (i, owner) in owners.iter().enumerate() {
        if owners[..i].contains(owner) {
            return Err(EngineError::bad_config("duplicate owner identity"));
        }
    }
    Ok(())
}

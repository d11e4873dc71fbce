//! # In-Memory Ledger Dispatcher
//!
//! Stands in for the opaque callee set behind the [`Dispatcher`] port:
//! credits dispatched value to a per-target balance, journals every payload
//! verbatim, and can be armed to fail specific targets so callers can
//! exercise the dispatch-failure path.

use std::collections::{HashMap, HashSet};

use shared_types::{Address, U256};

use crate::ports::outbound::{DispatchError, Dispatcher};

/// One delivered dispatch, recorded verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRecord {
    /// Target the dispatch went to.
    pub target: Address,
    /// Value credited.
    pub value: U256,
    /// Payload as the target received it.
    pub payload: Vec<u8>,
}

/// In-memory balance ledger plus payload journal.
#[derive(Debug, Clone, Default)]
pub struct LedgerDispatcher {
    balances: HashMap<Address, U256>,
    journal: Vec<DispatchRecord>,
    failing: HashSet<Address>,
}

impl LedgerDispatcher {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `target` to reject every dispatch sent to it.
    pub fn fail_target(&mut self, target: Address) {
        self.failing.insert(target);
    }

    /// Accumulated balance of `target`.
    pub fn balance_of(&self, target: &Address) -> U256 {
        self.balances.get(target).copied().unwrap_or_default()
    }

    /// Every successful dispatch, in delivery order.
    pub fn records(&self) -> &[DispatchRecord] {
        &self.journal
    }
}

impl Dispatcher for LedgerDispatcher {
    fn send(
        &mut self,
        target: Address,
        value: U256,
        payload: &[u8],
    ) -> Result<Vec<u8>, DispatchError> {
        if self.failing.contains(&target) {
            return Err(DispatchError::Rejected("target reverted".into()));
        }

        let balance = self.balances.entry(target).or_default();
        *balance += value;
        self.journal.push(DispatchRecord {
            target,
            value,
            payload: payload.to_vec(),
        });

        Ok(Vec::new())
    }
}

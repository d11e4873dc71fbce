//! Adapters: concrete implementations of the outbound ports.

pub mod ledger;

//! Shared test utilities for `StreetLedger`.
//!
//! Helpers for building ledgers over fresh in-memory slots and creating debt
//! records with sensible defaults.

use crate::errors::Result;
use crate::ledger::DebtLedger;
use crate::models::DebtRecord;
use crate::store::MemoryStore;
use std::sync::Arc;

/// Creates a ledger over a fresh in-memory slot with no connected account.
/// This is the standard setup for ledger tests.
pub fn memory_ledger() -> DebtLedger {
    DebtLedger::new(Arc::new(MemoryStore::new()), None)
}

/// Creates a test debt with sensible defaults.
///
/// # Defaults
/// * `debtor`: `"0xABC"`
/// * `description`: `"Test debt"`
/// * `creditor`: ledger default
pub fn create_test_debt(ledger: &DebtLedger, amount_owed: u64) -> Result<DebtRecord> {
    ledger.create_debt(amount_owed, "0xABC", "Test debt", None)
}

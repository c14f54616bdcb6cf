use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single informal debt entry between two acquaintances.
///
/// This is exactly the shape persisted in the ledger's storage slot: a JSON
/// array of these records, snake_case field names. Amounts are denominated in
/// the smallest unit of the settlement currency (e.g. 1_000_000 == 1.00 USDC).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DebtRecord {
    /// UUID v4, generated client-side at creation time.
    pub id: String,
    pub amount_owed: u64,
    /// Always 0 at creation; no partial-payment flow exists in scope.
    pub amount_paid: u64,
    /// Address of the party owed. Defaults to the creating account's address,
    /// or a placeholder when no account is connected.
    pub creditor: String,
    /// Address of the party who owes. Supplied by the creating user.
    pub debtor: String,
    /// Free-text reason for the debt.
    pub description: String,
    /// Set once the debtor acknowledges the debt; no operation in scope
    /// transitions it.
    pub is_confirmed: bool,
    pub created_at: DateTime<Utc>,
}

/// Aggregate figures the surrounding UI displays.
///
/// Derived, never stored: recomputed from the current record set on every
/// read, so there is no cache to invalidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerStats {
    pub count: usize,
    pub total_owed: u64,
}

impl LedgerStats {
    /// Computes the stats for a record set.
    pub fn of(records: &[DebtRecord]) -> Self {
        Self {
            count: records.len(),
            total_owed: records.iter().map(|r| r.amount_owed).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_record_serializes_with_persisted_field_names() {
        let record = DebtRecord {
            id: "d3b07384-d9a0-4c9c-8e4f-1a2b3c4d5e6f".to_string(),
            amount_owed: 50,
            amount_paid: 0,
            creditor: "0xDEF".to_string(),
            debtor: "0xABC".to_string(),
            description: "Lunch".to_string(),
            is_confirmed: false,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["amount_owed"], 50);
        assert_eq!(json["amount_paid"], 0);
        assert_eq!(json["creditor"], "0xDEF");
        assert_eq!(json["debtor"], "0xABC");
        assert_eq!(json["description"], "Lunch");
        assert_eq!(json["is_confirmed"], false);
        assert!(json.get("created_at").is_some());
    }

    #[test]
    fn test_stats_of_empty_set() {
        let stats = LedgerStats::of(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.total_owed, 0);
    }

    #[test]
    fn test_stats_sums_amount_owed() {
        let mk = |amount| DebtRecord {
            id: uuid::Uuid::new_v4().to_string(),
            amount_owed: amount,
            amount_paid: 0,
            creditor: "0xDEF".to_string(),
            debtor: "0xABC".to_string(),
            description: "test".to_string(),
            is_confirmed: false,
            created_at: Utc::now(),
        };

        let stats = LedgerStats::of(&[mk(50), mk(25), mk(0)]);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_owed, 75);
    }
}

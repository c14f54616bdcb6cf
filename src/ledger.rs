//! Debt ledger business logic - record lifecycle and change notifications.
//!
//! Every mutation is a synchronous whole-slot read-modify-write: read the
//! full record set, compute the new set, write it back, then broadcast a
//! payload-less change signal. Two handles mutating the same slot
//! concurrently can therefore lose an update (last write wins on the whole
//! collection); callers needing stronger guarantees must serialize their
//! mutations.

use crate::errors::{Error, Result};
use crate::models::{DebtRecord, LedgerStats};
use crate::store::SlotStore;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info};
use uuid::Uuid;

/// Creditor recorded when no account is connected.
pub const UNKNOWN_CREDITOR: &str = "unknown";

/// Capacity of the change-notification channel. Listeners that lag behind by
/// more than this many signals observe a `Lagged` error and should re-read.
const CHANGE_CHANNEL_CAPACITY: usize = 16;

/// The local debt ledger.
///
/// Owns the injected storage slot and the change-notification channel.
/// Cloning the ledger produces another view of the same slot and the same
/// channel, so a mutation through any clone is observed by subscribers of
/// every clone.
#[derive(Clone)]
pub struct DebtLedger {
    store: Arc<dyn SlotStore>,
    self_address: Option<String>,
    changes: broadcast::Sender<()>,
}

impl DebtLedger {
    /// Creates a ledger over `store`.
    ///
    /// `self_address` is the connected account's address, used as the default
    /// creditor for new records; pass `None` when no wallet is connected.
    pub fn new(store: Arc<dyn SlotStore>, self_address: Option<String>) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            store,
            self_address,
            changes,
        }
    }

    /// Subscribes to the change signal.
    ///
    /// The signal carries no payload and fires after the store write of every
    /// successful mutation; on receipt a view should re-run [`Self::list_debts`].
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.changes.subscribe()
    }

    /// Creates a new debt record and persists it.
    ///
    /// `debtor` and `description` must be non-empty after trimming. The new
    /// record is prepended, so [`Self::list_debts`] returns most-recent-first.
    /// `creditor` falls back to the connected account's address, then to
    /// [`UNKNOWN_CREDITOR`]. On validation failure nothing is read, written,
    /// or signalled.
    pub fn create_debt(
        &self,
        amount_owed: u64,
        debtor: &str,
        description: &str,
        creditor: Option<&str>,
    ) -> Result<DebtRecord> {
        let debtor = debtor.trim();
        if debtor.is_empty() {
            return Err(Error::validation("debtor address cannot be empty"));
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(Error::validation("description cannot be empty"));
        }

        let creditor = creditor
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(ToString::to_string)
            .or_else(|| self.self_address.clone())
            .unwrap_or_else(|| UNKNOWN_CREDITOR.to_string());

        let record = DebtRecord {
            id: Uuid::new_v4().to_string(),
            amount_owed,
            amount_paid: 0,
            creditor,
            debtor: debtor.to_string(),
            description: description.to_string(),
            is_confirmed: false,
            created_at: Utc::now(),
        };

        let mut records = self.read_records()?;
        records.insert(0, record.clone());
        self.write_records(&records)?;

        info!(
            id = %record.id,
            amount_owed = record.amount_owed,
            debtor = %record.debtor,
            "debt recorded"
        );
        Ok(record)
    }

    /// Settles (removes) the record with the given id.
    ///
    /// Settlement always removes the full record; there is no pay-down path.
    /// Settling an id that is absent (already settled, or never existed) is a
    /// silent no-op, so re-invoking after a retry or a stale view is safe; a
    /// no-op writes nothing and fires no change signal.
    pub fn settle_debt(&self, id: &str) -> Result<()> {
        let mut records = self.read_records()?;
        let before = records.len();
        records.retain(|r| r.id != id);

        if records.len() == before {
            debug!(id, "settle target not found; nothing to do");
            return Ok(());
        }

        self.write_records(&records)?;
        info!(id, "debt settled");
        Ok(())
    }

    /// Returns the current record set in stored order (most-recent-first).
    pub fn list_debts(&self) -> Result<Vec<DebtRecord>> {
        self.read_records()
    }

    /// Looks up a single record by id.
    pub fn get_debt(&self, id: &str) -> Result<DebtRecord> {
        self.read_records()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::NotFound { id: id.to_string() })
    }

    /// Recomputes the aggregate figures from the current record set.
    pub fn stats(&self) -> Result<LedgerStats> {
        Ok(LedgerStats::of(&self.read_records()?))
    }

    fn read_records(&self) -> Result<Vec<DebtRecord>> {
        match self.store.load()? {
            Some(payload) => Ok(serde_json::from_str(&payload)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_records(&self, records: &[DebtRecord]) -> Result<()> {
        let payload = serde_json::to_string(records)?;
        self.store.save(&payload)?;
        // Fails only when nobody is subscribed, which is fine.
        let _ = self.changes.send(());
        Ok(())
    }
}

/// Parses a raw amount field into a smallest-unit value.
///
/// Rejects empty input, negative values, and anything that is not a plain
/// base-10 integer, mirroring the validation the creation form needs before
/// [`DebtLedger::create_debt`] is called.
pub fn parse_amount(raw: &str) -> Result<u64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::validation("amount cannot be empty"));
    }
    raw.parse::<u64>()
        .map_err(|_| Error::validation(format!("'{raw}' is not a non-negative integer amount")))
}

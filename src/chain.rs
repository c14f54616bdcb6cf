//! Blockchain boundary: Move-call payload builders and the submitter trait.
//!
//! The core never talks to a chain itself. It builds a fully-formed call
//! description and hands it to a [`TransactionSubmitter`], which signs and
//! submits it out of process. A submission failure is reported as
//! [`Error::Submission`] and never touches the locally persisted record set.

use crate::errors::{Error, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// The shared on-chain clock object consumed by `request_debt`.
const CLOCK_OBJECT_ID: &str = "0x6";

/// One typed argument of a Move call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
    U64(u64),
    Address(String),
    Str(String),
    Object(String),
}

/// A fully-formed Move call: target entry function plus ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSpec {
    /// `<package>::<module>::<function>`.
    pub target: String,
    pub args: Vec<CallArg>,
}

/// Receipt returned by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReceipt {
    /// Transaction digest assigned by the chain.
    pub digest: String,
}

/// Builds the call that records a new debt on chain.
///
/// Mirrors the ledger's creation inputs: amount in smallest units, the
/// debtor's address, and the free-text reason. The trailing argument is the
/// shared clock object the entry function reads the timestamp from.
pub fn request_debt_call(
    package_id: &str,
    amount_owed: u64,
    debtor: &str,
    description: &str,
) -> CallSpec {
    CallSpec {
        target: format!("{package_id}::street_ledger::request_debt"),
        args: vec![
            CallArg::U64(amount_owed),
            CallArg::Address(debtor.to_string()),
            CallArg::Str(description.to_string()),
            CallArg::Object(CLOCK_OBJECT_ID.to_string()),
        ],
    }
}

/// Builds the call that settles an on-chain debt object.
pub fn settle_debt_call(package_id: &str, debt_id: &str) -> CallSpec {
    CallSpec {
        target: format!("{package_id}::street_ledger::settle_debt"),
        args: vec![CallArg::Object(debt_id.to_string())],
    }
}

/// Signs and submits a prepared call.
///
/// Implementations wrap a wallet SDK. The core treats the call as opaque and
/// never retries: retry policy belongs to the submitter or the user.
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    /// Submits `call`, returning the chain's receipt on success.
    async fn submit(&self, call: &CallSpec) -> Result<TxReceipt>;
}

/// In-memory submitter for tests and the CLI's mock mode.
///
/// Records every submitted call; can be flipped to fail so callers can
/// verify that submission failures leave local state alone.
#[derive(Debug, Default)]
pub struct MockSubmitter {
    submitted: Mutex<Vec<CallSpec>>,
    fail: bool,
}

impl MockSubmitter {
    /// A submitter that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// A submitter that rejects every call with [`Error::Submission`].
    pub fn failing() -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// The calls submitted so far, in order.
    pub fn submitted(&self) -> Vec<CallSpec> {
        self.submitted
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TransactionSubmitter for MockSubmitter {
    async fn submit(&self, call: &CallSpec) -> Result<TxReceipt> {
        if self.fail {
            return Err(Error::Submission {
                message: "mock submitter configured to fail".to_string(),
            });
        }
        if let Ok(mut calls) = self.submitted.lock() {
            calls.push(call.clone());
        }
        Ok(TxReceipt {
            digest: format!("mockdigest{:04}", self.submitted().len()),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_request_debt_call_shape() {
        let call = request_debt_call("0xPKG", 50, "0xABC", "Lunch");
        assert_eq!(call.target, "0xPKG::street_ledger::request_debt");
        assert_eq!(
            call.args,
            vec![
                CallArg::U64(50),
                CallArg::Address("0xABC".to_string()),
                CallArg::Str("Lunch".to_string()),
                CallArg::Object("0x6".to_string()),
            ]
        );
    }

    #[test]
    fn test_settle_debt_call_shape() {
        let call = settle_debt_call("0xPKG", "0xDEBT");
        assert_eq!(call.target, "0xPKG::street_ledger::settle_debt");
        assert_eq!(call.args, vec![CallArg::Object("0xDEBT".to_string())]);
    }

    #[tokio::test]
    async fn test_mock_submitter_records_calls() {
        let submitter = MockSubmitter::new();
        let call = settle_debt_call("0xPKG", "0xDEBT");

        let receipt = submitter.submit(&call).await.unwrap();
        assert!(!receipt.digest.is_empty());
        assert_eq!(submitter.submitted(), vec![call]);
    }

    #[tokio::test]
    async fn test_failing_submitter_reports_submission_error() {
        let submitter = MockSubmitter::failing();
        let call = settle_debt_call("0xPKG", "0xDEBT");

        let result = submitter.submit(&call).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Submission { message: _ }
        ));
        assert!(submitter.submitted().is_empty());
    }
}

//! Off-chain session boundary.
//!
//! A session is a bilateral state channel between the user and a friend,
//! used to log "street favors" instantly and gas-free. Opening one is
//! fire-and-forget from the ledger's perspective: the request is typed here,
//! the channel machinery lives entirely behind [`SessionProvider`].

use crate::errors::{Error, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Protocol identifier for street-favor sessions.
pub const STREET_PROTOCOL: &str = "street-ledger-v1";

/// Asset backing the opener's default allocation.
const DEFAULT_ASSET: &str = "usdc";

/// 1.00 USDC in smallest units.
const DEFAULT_ALLOCATION: u64 = 1_000_000;

/// Funds one participant commits to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionAllocation {
    pub participant: String,
    pub asset: String,
    /// Smallest-unit amount.
    pub amount: u64,
}

/// A typed request to open a bilateral session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRequest {
    pub protocol: String,
    /// Exactly two participants: the opener first, the counterparty second.
    pub participants: [String; 2],
    pub allocations: Vec<SessionAllocation>,
}

impl SessionRequest {
    /// Builds the standard street-favor session between the caller and a
    /// friend: [`STREET_PROTOCOL`], both addresses as participants, and a
    /// single 1.00 USDC allocation from the opener.
    ///
    /// Rejects a missing participant address before any provider is called.
    pub fn street_favor(self_address: &str, friend_address: &str) -> Result<Self> {
        let self_address = self_address.trim();
        let friend_address = friend_address.trim();
        if self_address.is_empty() || friend_address.is_empty() {
            return Err(Error::validation("both participant addresses are required"));
        }

        Ok(Self {
            protocol: STREET_PROTOCOL.to_string(),
            participants: [self_address.to_string(), friend_address.to_string()],
            allocations: vec![SessionAllocation {
                participant: self_address.to_string(),
                asset: DEFAULT_ASSET.to_string(),
                amount: DEFAULT_ALLOCATION,
            }],
        })
    }
}

/// Handle to an opened session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHandle {
    pub session_id: String,
}

/// Opens off-chain sessions on a state-channel network.
///
/// Failures surface as [`Error::Session`] and are never retried by the core.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Opens the requested session, returning its handle.
    async fn open_session(&self, request: &SessionRequest) -> Result<SessionHandle>;
}

/// In-memory provider for tests and the CLI's mock mode.
#[derive(Debug, Default)]
pub struct MockSessionProvider {
    opened: Mutex<Vec<SessionRequest>>,
    fail: bool,
}

impl MockSessionProvider {
    /// A provider that opens every session.
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider that rejects every request with [`Error::Session`].
    pub fn failing() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// The requests opened so far, in order.
    pub fn opened(&self) -> Vec<SessionRequest> {
        self.opened
            .lock()
            .map(|reqs| reqs.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SessionProvider for MockSessionProvider {
    async fn open_session(&self, request: &SessionRequest) -> Result<SessionHandle> {
        if self.fail {
            return Err(Error::Session {
                message: "mock session provider configured to fail".to_string(),
            });
        }
        if let Ok(mut reqs) = self.opened.lock() {
            reqs.push(request.clone());
        }
        Ok(SessionHandle {
            session_id: format!("mocksession{:04}", self.opened().len()),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_street_favor_request_shape() {
        let request = SessionRequest::street_favor("0xME", "0xFRIEND").unwrap();
        assert_eq!(request.protocol, STREET_PROTOCOL);
        assert_eq!(
            request.participants,
            ["0xME".to_string(), "0xFRIEND".to_string()]
        );
        assert_eq!(
            request.allocations,
            vec![SessionAllocation {
                participant: "0xME".to_string(),
                asset: "usdc".to_string(),
                amount: 1_000_000,
            }]
        );
    }

    #[test]
    fn test_street_favor_rejects_missing_addresses() {
        assert!(SessionRequest::street_favor("", "0xFRIEND").is_err());
        assert!(SessionRequest::street_favor("0xME", "  ").is_err());
    }

    #[tokio::test]
    async fn test_mock_provider_opens_sessions() {
        let provider = MockSessionProvider::new();
        let request = SessionRequest::street_favor("0xME", "0xFRIEND").unwrap();

        let handle = provider.open_session(&request).await.unwrap();
        assert!(!handle.session_id.is_empty());
        assert_eq!(provider.opened(), vec![request]);
    }

    #[tokio::test]
    async fn test_failing_provider_reports_session_error() {
        let provider = MockSessionProvider::failing();
        let request = SessionRequest::street_favor("0xME", "0xFRIEND").unwrap();

        let result = provider.open_session(&request).await;
        assert!(matches!(result.unwrap_err(), Error::Session { message: _ }));
    }
}

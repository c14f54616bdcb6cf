//! Wallet account boundary.
//!
//! The core never inspects wallet internals; it only needs the connected
//! account's address, treated as an opaque string. Real deployments put a
//! wallet adapter behind this trait; the shipped implementation reads the
//! address from configuration.

/// Supplies the current user's address, if a wallet is connected.
pub trait AccountProvider: Send + Sync {
    /// The connected account's address, or `None` when disconnected.
    fn current_address(&self) -> Option<String>;
}

/// An account fixed at construction time, from configuration or tests.
#[derive(Debug, Clone, Default)]
pub struct StaticAccount {
    address: Option<String>,
}

impl StaticAccount {
    /// Creates a provider reporting `address` as the connected account.
    pub fn connected(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
        }
    }

    /// Creates a provider with no connected account.
    pub fn disconnected() -> Self {
        Self::default()
    }
}

impl AccountProvider for StaticAccount {
    fn current_address(&self) -> Option<String> {
        self.address.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_account_reports_configured_address() {
        let account = StaticAccount::connected("0xME");
        assert_eq!(account.current_address().as_deref(), Some("0xME"));

        let none = StaticAccount::disconnected();
        assert_eq!(none.current_address(), None);
    }
}

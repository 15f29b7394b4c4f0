//! The in-memory store of accounts.

use super::Account;

/// Holds every account for the lifetime of the server.
///
/// The store is filled once at start up and is read-only afterwards, so it can
/// be shared between request handlers behind an `Arc` without a lock.
#[derive(Debug, Clone, Default)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Create a store holding `accounts`.
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Find the account whose number matches `number`, ignoring ASCII case.
    pub fn find_by_number(&self, number: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.number.eq_ignore_ascii_case(number))
    }

    /// All accounts in the order they were created.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// The number of accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store has no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

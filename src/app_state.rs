//! Implements a struct that holds the state of the server.

use std::sync::Arc;

use crate::{
    Error,
    account::{AccountStore, GeneratorConfig, generate_accounts},
    pagination::PaginationConfig,
    timezone::local_now,
};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The accounts that can be looked up.
    pub account_store: Arc<AccountStore>,

    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
}

impl AppState {
    /// Create a new [AppState] serving the accounts in `account_store`.
    pub fn new(account_store: AccountStore, pagination_config: PaginationConfig) -> Self {
        Self {
            account_store: Arc::new(account_store),
            pagination_config,
        }
    }

    /// Create a new [AppState] with freshly generated accounts.
    ///
    /// The transaction dates are relative to the current time in `local_timezone`,
    /// which should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an error if `local_timezone` is not a valid timezone.
    pub fn with_generated_accounts(
        generator_config: &GeneratorConfig,
        local_timezone: &str,
        pagination_config: PaginationConfig,
    ) -> Result<Self, Error> {
        let now = local_now(local_timezone)?;
        let accounts = generate_accounts(generator_config, now);
        tracing::info!(
            "Generated {} accounts with {} transactions each",
            accounts.len(),
            generator_config.transactions_per_account
        );

        Ok(Self::new(AccountStore::new(accounts), pagination_config))
    }
}

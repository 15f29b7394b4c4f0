use std::fmt::Display;

use rust_decimal::Decimal;
use time::OffsetDateTime;

pub type AccountId = i64;

pub type TransactionId = i64;

/// The kind of bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountCategory {
    /// An account for putting money aside.
    Savings,
    /// An everyday account for cash withdrawals and deposits.
    Cash,
}

impl AccountCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountCategory::Savings => "Savings",
            AccountCategory::Cash => "Cash",
        }
    }
}

impl Display for AccountCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether money was put into or taken out of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    /// The text used for the kind in the UI and in the `typeFilter` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A deposit or withdrawal on an [Account].
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The position of the transaction in the account's history, starting from 1.
    pub id: TransactionId,
    /// When the transaction happened.
    pub timestamp: OffsetDateTime,
    pub kind: TransactionKind,
    /// The signed amount: positive for deposits, negative for withdrawals.
    pub amount: Decimal,
    /// The account balance after this transaction was applied.
    pub balance_after: Decimal,
    pub description: String,
}

/// A bank account and its transaction history.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: AccountId,
    /// The account number that clients use to look up the account, e.g. "C00123456".
    pub number: String,
    /// The name of the account holder.
    pub holder: String,
    pub category: AccountCategory,
    pub created_at: OffsetDateTime,
    /// The current balance, equal to the sum of all transaction amounts.
    pub balance: Decimal,
    /// A human readable label for the account status, e.g. "Blocked (30 days)".
    pub status: String,
    /// When the account's funds become available.
    pub unlock_date: OffsetDateTime,
    pub transactions: Vec<Transaction>,
}

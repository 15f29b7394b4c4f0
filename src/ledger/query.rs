//! Looks up an account and selects the page of its transactions to display.

use rust_decimal::Decimal;
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::account::{Account, AccountStore, Transaction, TransactionKind};

/// The number of transactions shown on one page.
pub const PAGE_SIZE: usize = 5;

/// Displayed in place of the last transaction date when an account has no transactions.
pub const NO_DATE_PLACEHOLDER: &str = "-";

const DAY_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day padding:zero]/[month repr:numerical padding:zero]/[year]");

/// What the client asked to see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerQuery<'a> {
    /// The account number to look up. `None` or a blank string means no lookup was requested.
    pub account_id: Option<&'a str>,
    /// Only show transactions of this kind, e.g. "Deposit". `None` or blank shows all kinds.
    pub type_filter: Option<&'a str>,
    /// The 1-based page number. Values below 1 are treated as 1.
    pub page: i64,
}

/// The account, the page of its transactions and statistics over all of its transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerQueryResult<'a> {
    pub account: Option<&'a Account>,
    /// The transactions on the current page, most recent first.
    pub transactions_page: Vec<&'a Transaction>,
    /// The page that `transactions_page` holds, after clamping.
    pub current_page: u64,
    /// The number of pages of filtered transactions.
    pub total_pages: u64,
    /// The type filter that was applied, if any.
    pub type_filter: Option<String>,
    pub total_deposits: Decimal,
    /// The sum of the withdrawal amounts as a positive number.
    pub total_withdrawals: Decimal,
    pub transaction_count: usize,
    /// The date of the most recent transaction as "DD/MM/YYYY", or "-".
    pub last_transaction_date: String,
}

impl LedgerQueryResult<'_> {
    fn empty(current_page: u64, type_filter: Option<String>) -> Self {
        Self {
            account: None,
            transactions_page: Vec::new(),
            current_page,
            total_pages: 0,
            type_filter,
            total_deposits: Decimal::ZERO,
            total_withdrawals: Decimal::ZERO,
            transaction_count: 0,
            last_transaction_date: NO_DATE_PLACEHOLDER.to_owned(),
        }
    }
}

/// Run `query` against `store`.
///
/// Never fails: a blank account ID, an unknown account, a filter that matches
/// nothing and a page past the end all give empty results.
pub fn query_ledger<'a>(
    store: &'a AccountStore,
    query: &LedgerQuery<'_>,
) -> LedgerQueryResult<'a> {
    let current_page = query.page.max(1) as u64;
    let type_filter = non_blank(query.type_filter);

    let Some(account_id) = non_blank(query.account_id) else {
        return LedgerQueryResult::empty(current_page, type_filter.map(str::to_owned));
    };

    let Some(account) = store.find_by_number(account_id) else {
        tracing::debug!("no account matches the number {account_id:?}");
        return LedgerQueryResult::empty(current_page, type_filter.map(str::to_owned));
    };

    let mut transactions = account.transactions.iter().collect::<Vec<_>>();
    transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    if let Some(type_filter) = type_filter {
        transactions.retain(|transaction| transaction.kind.as_str() == type_filter);
    }

    let total_pages = transactions.len().div_ceil(PAGE_SIZE) as u64;
    let offset = (current_page - 1).saturating_mul(PAGE_SIZE as u64);
    let transactions_page = transactions
        .into_iter()
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(PAGE_SIZE)
        .collect();

    let stats = TransactionStats::from_transactions(&account.transactions);

    LedgerQueryResult {
        account: Some(account),
        transactions_page,
        current_page,
        total_pages,
        type_filter: type_filter.map(str::to_owned),
        total_deposits: stats.total_deposits,
        total_withdrawals: stats.total_withdrawals,
        transaction_count: stats.count,
        last_transaction_date: stats
            .last_timestamp
            .map(format_day)
            .unwrap_or_else(|| NO_DATE_PLACEHOLDER.to_owned()),
    }
}

struct TransactionStats {
    total_deposits: Decimal,
    total_withdrawals: Decimal,
    count: usize,
    last_timestamp: Option<OffsetDateTime>,
}

impl TransactionStats {
    fn from_transactions(transactions: &[Transaction]) -> Self {
        transactions.iter().fold(
            Self {
                total_deposits: Decimal::ZERO,
                total_withdrawals: Decimal::ZERO,
                count: 0,
                last_timestamp: None,
            },
            |mut stats, transaction| {
                match transaction.kind {
                    TransactionKind::Deposit => stats.total_deposits += transaction.amount,
                    TransactionKind::Withdrawal => stats.total_withdrawals -= transaction.amount,
                }
                stats.count += 1;
                stats.last_timestamp = stats
                    .last_timestamp
                    .max(Some(transaction.timestamp));
                stats
            },
        )
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

/// Format the date part of `timestamp` as "DD/MM/YYYY".
pub fn format_day(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(DAY_FORMAT)
        .unwrap_or_else(|_| timestamp.date().to_string())
}

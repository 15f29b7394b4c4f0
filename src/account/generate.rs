//! Generates the fake accounts that are served by the application.
//!
//! The data is pseudo-random but deterministic: the same [GeneratorConfig] and
//! start time always produce the same accounts. The randomness comes from
//! hashing the seed together with the account and transaction indices.

use rust_decimal::Decimal;
use sha2::{Digest, Sha256};
use time::{Date, Duration, Month, OffsetDateTime};

use super::{Account, AccountCategory, Transaction, TransactionKind};

/// The smallest amount a generated transaction can have.
pub const MIN_AMOUNT: i64 = 50_000;
/// The upper bound (exclusive) for the amount of a generated transaction.
pub const MAX_AMOUNT: i64 = 200_000;

/// The number of days between consecutive generated transactions.
const DAYS_BETWEEN_TRANSACTIONS: i64 = 3;
/// How long ago the generated accounts were opened.
const ACCOUNT_AGE_MONTHS: u8 = 9;
/// How long until the generated accounts are unlocked.
const LOCK_PERIOD_DAYS: i64 = 30;

/// Controls how much data is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// The number of accounts to create.
    pub account_count: u32,
    /// The number of transactions to create for each account.
    pub transactions_per_account: u32,
    /// Changing the seed changes the kinds and amounts of the transactions.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            account_count: 5,
            transactions_per_account: 15,
            seed: 0,
        }
    }
}

/// Create `config.account_count` accounts, each with
/// `config.transactions_per_account` transactions dated relative to `now`.
///
/// Transaction `j` of an account happens `3 * j` days before `now`, so the
/// transactions are generated from newest to oldest. The balance after each
/// transaction is the running sum of the amounts in generation order, and the
/// account balance is the running sum after the last transaction.
pub fn generate_accounts(config: &GeneratorConfig, now: OffsetDateTime) -> Vec<Account> {
    let created_at = months_before(now, ACCOUNT_AGE_MONTHS);
    let unlock_date = now + Duration::days(LOCK_PERIOD_DAYS);

    (1..=config.account_count)
        .map(|account_index| {
            let transactions = generate_transactions(config, account_index, now);
            let balance = transactions
                .last()
                .map(|transaction| transaction.balance_after)
                .unwrap_or(Decimal::ZERO);

            Account {
                id: account_index.into(),
                number: format!("C00{account_index}23456"),
                holder: format!("Client {account_index}"),
                category: if account_index % 2 == 0 {
                    AccountCategory::Savings
                } else {
                    AccountCategory::Cash
                },
                created_at,
                balance,
                status: format!("Blocked ({LOCK_PERIOD_DAYS} days)"),
                unlock_date,
                transactions,
            }
        })
        .collect()
}

fn generate_transactions(
    config: &GeneratorConfig,
    account_index: u32,
    now: OffsetDateTime,
) -> Vec<Transaction> {
    let mut balance = Decimal::ZERO;

    (1..=config.transactions_per_account)
        .map(|transaction_index| {
            let (kind, magnitude) =
                draw_transaction(config.seed, account_index, transaction_index);
            let amount = match kind {
                TransactionKind::Deposit => Decimal::from(magnitude),
                TransactionKind::Withdrawal => -Decimal::from(magnitude),
            };
            balance += amount;

            let description = match kind {
                TransactionKind::Deposit => "Salary transfer",
                TransactionKind::Withdrawal => "Counter withdrawal",
            };

            Transaction {
                id: transaction_index.into(),
                timestamp: now
                    - Duration::days(DAYS_BETWEEN_TRANSACTIONS * i64::from(transaction_index)),
                kind,
                amount,
                balance_after: balance,
                description: description.to_owned(),
            }
        })
        .collect()
}

/// Pick the kind and unsigned amount of a transaction from a hash of its position.
fn draw_transaction(
    seed: u64,
    account_index: u32,
    transaction_index: u32,
) -> (TransactionKind, i64) {
    let digest = Sha256::new()
        .chain_update(seed.to_be_bytes())
        .chain_update(account_index.to_be_bytes())
        .chain_update(transaction_index.to_be_bytes())
        .finalize();

    let kind = if digest[0] % 2 == 0 {
        TransactionKind::Deposit
    } else {
        TransactionKind::Withdrawal
    };

    let mut draw = [0u8; 8];
    draw.copy_from_slice(&digest[1..9]);
    let span = (MAX_AMOUNT - MIN_AMOUNT) as u64;
    let magnitude = MIN_AMOUNT + (u64::from_be_bytes(draw) % span) as i64;

    (kind, magnitude)
}

/// Step back `months` calendar months from `date_time`.
///
/// The day of the month is clamped to the length of the target month, e.g.
/// one month before 31 March is 28 (or 29) February.
fn months_before(date_time: OffsetDateTime, months: u8) -> OffsetDateTime {
    let month_index = date_time.year() * 12 + i32::from(u8::from(date_time.month()) - 1)
        - i32::from(months);
    let year = month_index.div_euclid(12);
    // `rem_euclid` keeps the value in 0..12, so the conversion cannot fail.
    let month = Month::try_from(month_index.rem_euclid(12) as u8 + 1).unwrap_or(Month::January);
    let date = (1..=date_time.day())
        .rev()
        .find_map(|day| Date::from_calendar_date(year, month, day).ok());

    match date {
        Some(date) => date_time.replace_date(date),
        None => {
            tracing::warn!("could not step back {months} months from {date_time}");
            date_time - Duration::days(30 * i64::from(months))
        }
    }
}

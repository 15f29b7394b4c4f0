mod core;
mod generate;
mod store;

pub use core::{Account, AccountCategory, Transaction, TransactionKind};
pub use generate::{GeneratorConfig, generate_accounts};
pub use store::AccountStore;

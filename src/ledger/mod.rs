//! The account page: looking up an account and browsing its transaction history.
//!
//! `query` holds the filtering, paging and statistics logic, `page` the route
//! handlers and `view` the HTML.

mod page;
mod query;
mod view;

pub use page::{LedgerViewState, get_account_page, post_account_lookup};
pub use query::{LedgerQuery, LedgerQueryResult, PAGE_SIZE, query_ledger};

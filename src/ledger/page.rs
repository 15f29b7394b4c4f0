//! Defines the route handlers for the account page.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    account::{AccountStore, TransactionKind},
    endpoints,
    pagination::{PaginationConfig, PaginationIndicator, create_pagination_indicators},
};

use super::{
    query::{LedgerQuery, LedgerQueryResult, query_ledger},
    view::account_page_view,
};

/// The state needed for the account page.
#[derive(Debug, Clone)]
pub struct LedgerViewState {
    /// The accounts that can be looked up.
    pub account_store: Arc<AccountStore>,
    /// Configuration for pagination controls.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for LedgerViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            account_store: state.account_store.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// The query parameters for the account page.
///
/// All fields are kept as strings so that a malformed parameter never causes
/// the request to be rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerParams {
    /// The account number to look up.
    pub account_id: Option<String>,
    /// Only show transactions of this kind, either "Deposit" or "Withdrawal".
    pub type_filter: Option<String>,
    /// The page number to display. Starts from 1.
    pub page: Option<String>,
}

impl LedgerParams {
    /// The requested page, or 1 if the page is missing or not a number.
    fn page_number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// The form for looking up an account.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountLookupForm {
    pub account_id: Option<String>,
}

/// URL encoding helper for account page query params.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccountPageQuery<'a> {
    account_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    type_filter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u64>,
}

impl<'a> AccountPageQuery<'a> {
    pub(crate) fn new(account_id: &'a str) -> Self {
        Self {
            account_id,
            type_filter: None,
            page: None,
        }
    }

    pub(crate) fn with_type_filter(self, type_filter: Option<&'a str>) -> Self {
        Self {
            type_filter,
            ..self
        }
    }

    pub(crate) fn with_page(self, page: u64) -> Self {
        Self {
            page: Some(page),
            ..self
        }
    }

    pub(crate) fn to_url(self) -> Result<String, Error> {
        let query = serde_urlencoded::to_string(self)
            .inspect_err(|error| {
                tracing::error!("could not encode account page query {self:?}: {error}")
            })
            .map_err(|error| Error::QueryEncodingError(error.to_string()))?;

        Ok(format!("{}?{query}", endpoints::ACCOUNT_VIEW))
    }
}

/// A link in the type filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FilterLink {
    pub label: &'static str,
    pub href: String,
    pub is_active: bool,
}

/// An element of the pager with the URL it links to, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PagerItem {
    pub indicator: PaginationIndicator,
    pub href: Option<String>,
}

/// Everything the account page needs to render.
pub(crate) struct AccountPageViewModel<'a> {
    /// The account number as entered by the client, if any.
    pub entered_account_id: Option<&'a str>,
    pub result: LedgerQueryResult<'a>,
    pub filter_links: Vec<FilterLink>,
    pub pager: Vec<PagerItem>,
}

/// Render the account lookup form and, if an account was found, its transactions.
pub async fn get_account_page(
    State(state): State<LedgerViewState>,
    Query(params): Query<LedgerParams>,
) -> Result<Response, Error> {
    let query = LedgerQuery {
        account_id: params.account_id.as_deref(),
        type_filter: params.type_filter.as_deref(),
        page: params.page_number(),
    };
    let result = query_ledger(&state.account_store, &query);
    let model = build_view_model(
        params.account_id.as_deref(),
        result,
        state.pagination_config.max_pages,
    )?;

    Ok(account_page_view(&model).into_response())
}

/// Redirect the account lookup form to the account page for the entered account number.
pub async fn post_account_lookup(Form(form): Form<AccountLookupForm>) -> Result<Redirect, Error> {
    let account_id = form.account_id.as_deref().map(str::trim).unwrap_or_default();

    if account_id.is_empty() {
        return Ok(Redirect::to(endpoints::ACCOUNT_VIEW));
    }

    let url = AccountPageQuery::new(account_id).to_url()?;

    Ok(Redirect::to(&url))
}

fn build_view_model<'a>(
    entered_account_id: Option<&'a str>,
    result: LedgerQueryResult<'a>,
    max_pages: u64,
) -> Result<AccountPageViewModel<'a>, Error> {
    let entered_account_id = entered_account_id.filter(|id| !id.trim().is_empty());

    let (filter_links, pager) = match result.account {
        Some(account) => {
            let base_query = AccountPageQuery::new(&account.number);
            let type_filter = result.type_filter.as_deref();

            let filter_links = build_filter_links(base_query, type_filter)?;
            let pager = create_pagination_indicators(
                result.current_page,
                result.total_pages,
                max_pages,
            )
            .into_iter()
            .map(|indicator| -> Result<PagerItem, Error> {
                let page = match indicator {
                    PaginationIndicator::Page(page)
                    | PaginationIndicator::NextButton(page)
                    | PaginationIndicator::BackButton(page) => page,
                    PaginationIndicator::CurrPage(_) | PaginationIndicator::Ellipsis => {
                        return Ok(PagerItem {
                            indicator,
                            href: None,
                        });
                    }
                };

                let href = base_query
                    .with_type_filter(type_filter)
                    .with_page(page)
                    .to_url()?;

                Ok(PagerItem {
                    indicator,
                    href: Some(href),
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

            (filter_links, pager)
        }
        None => (Vec::new(), Vec::new()),
    };

    Ok(AccountPageViewModel {
        entered_account_id,
        result,
        filter_links,
        pager,
    })
}

fn build_filter_links(
    base_query: AccountPageQuery<'_>,
    type_filter: Option<&str>,
) -> Result<Vec<FilterLink>, Error> {
    let options = [
        ("All", None),
        ("Deposits", Some(TransactionKind::Deposit.as_str())),
        ("Withdrawals", Some(TransactionKind::Withdrawal.as_str())),
    ];

    options
        .into_iter()
        .map(|(label, filter)| -> Result<FilterLink, Error> {
            Ok(FilterLink {
                label,
                href: base_query.with_type_filter(filter).to_url()?,
                is_active: filter == type_filter,
            })
        })
        .collect()
}

//! Application router configuration.

use axum::{Router, middleware, response::Redirect, routing::get};

use crate::{
    AppState, endpoints,
    internal_server_error::get_500_internal_server_error,
    ledger::{get_account_page, post_account_lookup},
    logging_middleware,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(
            endpoints::ACCOUNT_VIEW,
            get(get_account_page).post(post_account_lookup),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_500_internal_server_error),
        )
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// The root path '/' redirects to the account page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::ACCOUNT_VIEW)
}

//! The endpoint URIs.

/// The root route which redirects to the account page.
pub const ROOT: &str = "/";
/// The page for looking up an account and viewing its transactions.
///
/// GET renders the page, POST submits the account lookup form.
pub const ACCOUNT_VIEW: &str = "/account";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

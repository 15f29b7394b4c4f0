//! The page to display when the server could not handle a request.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

const DEFAULT_DESCRIPTION: &str = "Sorry, the account ledger is unavailable.";
const DEFAULT_FIX: &str = "Try looking up the account again later or check the server logs.";

/// What went wrong and what the client or operator can do about it.
pub struct ServerErrorMessage<'a> {
    pub description: &'a str,
    pub fix: &'a str,
}

impl Default for ServerErrorMessage<'_> {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION,
            fix: DEFAULT_FIX,
        }
    }
}

impl IntoResponse for ServerErrorMessage<'_> {
    fn into_response(self) -> Response {
        let page = error_view("Internal Server Error", "500", self.description, self.fix);

        (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
    }
}

pub async fn get_500_internal_server_error() -> Response {
    ServerErrorMessage::default().into_response()
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use scraper::Selector;

    use crate::test_utils::{assert_content_type, assert_valid_html, parse_html_document};

    use super::{DEFAULT_DESCRIPTION, ServerErrorMessage, get_500_internal_server_error};

    #[tokio::test]
    async fn default_page_has_500_status_and_generic_message() {
        let response = get_500_internal_server_error().await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains(DEFAULT_DESCRIPTION), "got page text {text:?}");
    }

    #[tokio::test]
    async fn custom_message_is_shown() {
        let response = ServerErrorMessage {
            description: "Invalid Timezone Settings",
            fix: "Set a canonical timezone.",
        }
        .into_response();

        let html = parse_html_document(response).await;
        let paragraphs = html
            .select(&Selector::parse("p").unwrap())
            .map(|p| p.text().collect::<String>().trim().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(
            paragraphs,
            ["Invalid Timezone Settings", "Set a canonical timezone."]
        );
    }
}

//! Static chat page.

use axum::response::Html;

const CHAT_PAGE: &str = include_str!("../../static/chat.html");

/// `GET /`: the browser chat UI.
pub async fn index_handler() -> Html<&'static str> {
    Html(CHAT_PAGE)
}

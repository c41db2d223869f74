//! Conversation history endpoint.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::SignedCookieJar;

use crate::AppState;
use crate::models::HistoryResponse;
use crate::session;

/// `GET /api/history`: the caller's conversation, oldest first.
pub async fn history_handler(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Json<HistoryResponse>) {
    let (jar, session_id) = session::resolve(jar);
    let messages = match state.sessions.get(&session_id) {
        Some(bot) => bot.lock().await.history().to_vec(),
        None => Vec::new(),
    };
    (jar, Json(HistoryResponse { messages }))
}

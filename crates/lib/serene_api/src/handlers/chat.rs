//! Chat request handler.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::SignedCookieJar;
use tracing::debug;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChatRequest, ChatResponse};
use crate::session;

/// `POST /chat`: run one conversation turn for the caller's session.
///
/// The session's bot stays locked for the whole turn, so concurrent requests
/// from one session are answered in order. A blank message is rejected
/// before any session is created.
pub async fn chat_handler(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Json(body): Json<ChatRequest>,
) -> AppResult<(SignedCookieJar, Json<ChatResponse>)> {
    if body.message.trim().is_empty() {
        return Err(AppError::Validation("Message must not be empty".into()));
    }

    let (jar, session_id) = session::resolve(jar);
    debug!(session = %session_id, "chat turn");

    let bot = state.sessions.get_or_create(&session_id);
    let response = bot.lock().await.process_message(&body.message).await?;

    Ok((jar, Json(ChatResponse { response })))
}

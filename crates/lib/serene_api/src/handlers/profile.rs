//! Profile and stress-record handlers.
//!
//! Save and load go through the configured profile file; the rest act on the
//! caller's in-memory session.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::SignedCookieJar;
use serene_core::profile::{PROFILE_SAVED, PersistedProfile, ProfileUpdate};
use serene_core::stress::StressInfoUpdate;
use tracing::info;

use crate::AppState;
use crate::error::AppResult;
use crate::models::MessageResponse;
use crate::session;

/// `GET /api/profile`: current profile and stress record.
///
/// A caller without a session sees the empty record; no session is created.
pub async fn get_profile_handler(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Json<PersistedProfile>) {
    let (jar, session_id) = session::resolve(jar);
    let body = match state.sessions.get(&session_id) {
        Some(bot) => bot.lock().await.snapshot(),
        None => PersistedProfile::default(),
    };
    (jar, Json(body))
}

/// `PUT /api/profile`: overwrite the provided profile fields.
pub async fn update_profile_handler(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Json(body): Json<ProfileUpdate>,
) -> (SignedCookieJar, Json<MessageResponse>) {
    let (jar, session_id) = session::resolve(jar);
    let bot = state.sessions.get_or_create(&session_id);
    let message = bot.lock().await.update_profile(body);
    (jar, Json(message.into()))
}

/// `PUT /api/stress-info`: overwrite the provided stress fields.
pub async fn update_stress_info_handler(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Json(body): Json<StressInfoUpdate>,
) -> (SignedCookieJar, Json<MessageResponse>) {
    let (jar, session_id) = session::resolve(jar);
    let bot = state.sessions.get_or_create(&session_id);
    let message = bot.lock().await.set_stress_info(body);
    (jar, Json(message.into()))
}

/// `POST /api/profile/save`: write the session's profile to disk.
///
/// The file write runs on the blocking pool, after the session lock is
/// released.
pub async fn save_profile_handler(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> AppResult<(SignedCookieJar, Json<MessageResponse>)> {
    let (jar, session_id) = session::resolve(jar);
    let bot = state.sessions.get_or_create(&session_id);
    let data = bot.lock().await.snapshot();

    let store = state.profile_store.clone();
    tokio::task::spawn_blocking(move || store.save(&data)).await??;

    info!(session = %session_id, path = %state.profile_store.path().display(), "profile saved");
    Ok((jar, Json(PROFILE_SAVED.into())))
}

/// `POST /api/profile/load`: replace the session's profile from disk.
pub async fn load_profile_handler(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> AppResult<(SignedCookieJar, Json<MessageResponse>)> {
    let (jar, session_id) = session::resolve(jar);

    let store = state.profile_store.clone();
    let outcome = tokio::task::spawn_blocking(move || store.load()).await??;

    let bot = state.sessions.get_or_create(&session_id);
    let message = bot.lock().await.apply_load(outcome);
    info!(session = %session_id, result = message, "profile load");
    Ok((jar, Json(message.into())))
}

//! # serene_api
//!
//! HTTP API library for Serene.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod session;

use std::sync::Arc;

use axum::Router;
use axum::extract::FromRef;
use axum::routing::{get, post, put};
use axum_extra::extract::cookie::Key;
use serene_core::llm::ModelClient;
use serene_core::profile::ProfileStore;
use serene_core::session::SessionRegistry;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{chat, health, history, index, profile};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// One conversation per session cookie.
    pub sessions: Arc<SessionRegistry>,
    /// Profile file backing save/load.
    pub profile_store: ProfileStore,
    /// Session cookie signing key.
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(config: ApiConfig, model: Arc<dyn ModelClient>) -> Self {
        Self {
            sessions: Arc::new(SessionRegistry::with_limits(
                model,
                config.session_idle_ttl,
                config.max_sessions,
            )),
            profile_store: ProfileStore::new(config.profile_path.clone()),
            cookie_key: session::signing_key(&config.secret_key),
            config,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::GET_INDEX, get(index::index_handler))
        .route(routes::POST_CHAT, post(chat::chat_handler))
        .route(routes::GET_API_HEALTH, get(health::health_handler))
        .route(routes::GET_API_HISTORY, get(history::history_handler))
        .route(
            routes::API_PROFILE,
            get(profile::get_profile_handler).put(profile::update_profile_handler),
        )
        .route(
            routes::PUT_API_STRESS_INFO,
            put(profile::update_stress_info_handler),
        )
        .route(routes::POST_API_PROFILE_SAVE, post(profile::save_profile_handler))
        .route(routes::POST_API_PROFILE_LOAD, post(profile::load_profile_handler))
        .layer(cors)
        .with_state(state)
}

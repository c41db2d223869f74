//! Health check endpoint.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::HealthResponse;

/// `GET /api/health`: core version and active model provider.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        greeting: serene_core::greeting(),
        provider: state.sessions.model().provider().to_string(),
    })
}

//! Request and response bodies.

use serde::{Deserialize, Serialize};
use serene_core::bot::ChatMessage;

/// `POST /chat` request.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// `POST /chat` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Status message returned by profile mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<&str> for MessageResponse {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// `GET /api/history` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub messages: Vec<ChatMessage>,
}

/// `GET /api/health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub greeting: String,
    pub provider: String,
}

/// Error body for all failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

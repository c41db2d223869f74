//! Model clients: text completion against a generative language model.
//!
//! Supports multiple providers and resolves which one to use from the
//! environment.
//!
//! # Providers
//!
//! - `"gemini"`: Google Generative Language API (`gemini-1.5-pro`)
//! - `"local"`: Deterministic echo of the prompt (offline, no external deps)

pub mod config;
pub mod gemini;
pub mod local;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use config::LlmConfig;

/// Errors that can occur while generating a reply.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Provider returned no text")]
    EmptyResponse,

    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),
}

/// A text completion service. The reply is treated as an opaque string.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Short provider name for logs and health output.
    fn provider(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Build the client for the configured provider.
pub fn build_client(config: &LlmConfig) -> Result<Arc<dyn ModelClient>, LlmError> {
    match config.provider.as_str() {
        "gemini" => Ok(Arc::new(gemini::GeminiClient::new(config))),
        "local" => Ok(Arc::new(local::LocalModel)),
        other => Err(LlmError::UnsupportedProvider(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn llm_config(provider: &str) -> LlmConfig {
        LlmConfig {
            provider: provider.to_string(),
            gemini_api_key: None,
            gemini_model: config::DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: config::DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }

    #[test]
    fn known_providers_resolve() {
        assert_eq!(build_client(&llm_config("gemini")).unwrap().provider(), "gemini");
        assert_eq!(build_client(&llm_config("local")).unwrap().provider(), "local");
    }

    #[test]
    fn unknown_provider_rejected() {
        let err = build_client(&llm_config("azure")).err().unwrap();
        assert!(matches!(err, LlmError::UnsupportedProvider(p) if p == "azure"));
    }
}

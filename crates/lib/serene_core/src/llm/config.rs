//! Model provider configuration.

use std::env;

pub const DEFAULT_PROVIDER: &str = "gemini";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Resolved configuration for which model provider to use.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Provider name: `"gemini"` or `"local"`.
    pub provider: String,
    /// Gemini API key. Not validated here; a missing key fails at call time.
    pub gemini_api_key: Option<String>,
    /// Gemini model name.
    pub gemini_model: String,
    /// Gemini API base URL (overridable for proxies and tests).
    pub gemini_base_url: String,
}

impl LlmConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable          | Default                                     |
    /// |-------------------|---------------------------------------------|
    /// | `LLM_PROVIDER`    | `gemini`                                    |
    /// | `GEMINI_API_KEY`  | unset                                       |
    /// | `GEMINI_MODEL`    | `gemini-1.5-pro`                            |
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com` |
    pub fn from_env() -> Self {
        Self {
            provider: non_empty_var("LLM_PROVIDER")
                .map(|v| v.to_ascii_lowercase())
                .unwrap_or_else(|| DEFAULT_PROVIDER.to_string()),
            gemini_api_key: non_empty_var("GEMINI_API_KEY"),
            gemini_model: non_empty_var("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: non_empty_var("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
        }
    }

    /// Offline configuration using the local echo provider.
    pub fn local() -> Self {
        Self {
            provider: "local".to_string(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_config_has_no_key() {
        let config = LlmConfig::local();
        assert_eq!(config.provider, "local");
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.gemini_model, "gemini-1.5-pro");
    }

    #[test]
    fn unset_variable_is_none() {
        assert!(non_empty_var("SERENE_TEST_DEFINITELY_UNSET_VAR").is_none());
    }
}

//! Local deterministic provider.
//!
//! Echoes the rendered prompt back as the reply. No network, no key; useful
//! for offline development and for tests.

use async_trait::async_trait;

use super::{LlmError, ModelClient};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalModel;

#[async_trait]
impl ModelClient for LocalModel {
    fn provider(&self) -> &str {
        "local"
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        Ok(prompt.trim().to_string())
    }
}

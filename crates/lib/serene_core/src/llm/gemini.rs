//! Google Gemini provider.
//!
//! Calls `generateContent` once per prompt. There is no retry; a failed call
//! surfaces to the caller as [`LlmError::Provider`].

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::LlmConfig;
use super::{LlmError, ModelClient};

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    fn provider(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::Config("GEMINI_API_KEY is required for gemini provider".to_string()))?;

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&GenerateRequest {
                contents: [Content {
                    parts: [RequestPart { text: prompt }],
                }],
            })
            .send()
            .await
            .map_err(|e| LlmError::Provider(format!("Gemini request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(LlmError::Provider(format!(
                "Gemini generateContent failed: {status} {body}"
            )));
        }

        let data: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::Provider(format!("Gemini response parse error: {e}")))?;

        let text = extract_text(data)?;
        debug!(model = %self.model, chars = text.len(), "gemini reply received");
        Ok(text)
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(data: GenerateResponse) -> Result<String, LlmError> {
    let text: String = data
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        Err(LlmError::EmptyResponse)
    } else {
        Ok(text)
    }
}

//! Anthropic messages API adapter.

use async_trait::async_trait;
use reqwest::Client;

use super::{AiResponse, Backend, BackendError};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 4096;

/// Claude client backed by the Anthropic messages API.
pub struct AnthropicBackend {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl AnthropicBackend {
    /// Create a backend with an explicit key (None = unconfigured).
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    /// Create a backend from the `ANTHROPIC_API_KEY` environment variable.
    pub fn from_env(model: impl Into<String>) -> Self {
        Self::new(std::env::var("ANTHROPIC_API_KEY").ok(), model)
    }

    /// Override the API base URL (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Backend for AnthropicBackend {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn matches_hint(&self, hint: &str) -> bool {
        hint.contains("claude")
    }

    async fn invoke(&self, prompt: &str, model: &str) -> Result<AiResponse, BackendError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(BackendError::NotConfigured("anthropic"))?;

        let body = serde_json::json!({
            "model": model,
            "max_tokens": MAX_TOKENS,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Api {
                backend: "anthropic",
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                backend: "anthropic",
                message: format!("HTTP {status}: {body}"),
            });
        }

        // Parse as raw Value and navigate; strict structs break on
        // vendor payload additions.
        let raw: serde_json::Value = response.json().await.map_err(|e| BackendError::Api {
            backend: "anthropic",
            message: format!("invalid JSON response: {e}"),
        })?;

        let content = raw
            .get("content")
            .and_then(|c| c.as_array())
            .and_then(|arr| arr.first())
            .and_then(|block| block.get("text"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| BackendError::Api {
                backend: "anthropic",
                message: "response has no text content".to_string(),
            })?
            .to_string();

        let tokens_used = raw.get("usage").and_then(|usage| {
            let input = usage.get("input_tokens")?.as_u64()?;
            let output = usage.get("output_tokens")?.as_u64()?;
            Some(input + output)
        });

        Ok(AiResponse {
            model: model.to_string(),
            content,
            tokens_used,
            cost_estimate: None,
        })
    }
}

//! Gemini generateContent API adapter.

use async_trait::async_trait;
use reqwest::Client;

use super::{AiResponse, Backend, BackendError};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for the Gemini generateContent API.
pub struct GeminiBackend {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GeminiBackend {
    /// Create a backend with an explicit key (None = unconfigured).
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    /// Create a backend from the `GEMINI_API_KEY` environment variable.
    pub fn from_env(model: impl Into<String>) -> Self {
        Self::new(std::env::var("GEMINI_API_KEY").ok(), model)
    }

    /// Override the API base URL (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Backend for GeminiBackend {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn invoke(&self, prompt: &str, model: &str) -> Result<AiResponse, BackendError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(BackendError::NotConfigured("gemini"))?;

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, model
            ))
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Api {
                backend: "gemini",
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                backend: "gemini",
                message: format!("HTTP {status}: {body}"),
            });
        }

        let raw: serde_json::Value = response.json().await.map_err(|e| BackendError::Api {
            backend: "gemini",
            message: format!("invalid JSON response: {e}"),
        })?;

        let parts = raw
            .get("candidates")
            .and_then(|c| c.as_array())
            .and_then(|arr| arr.first())
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|p| p.as_array())
            .ok_or_else(|| BackendError::Api {
                backend: "gemini",
                message: "response has no candidates".to_string(),
            })?;

        let content = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
            .collect::<Vec<_>>()
            .join("");

        let tokens_used = raw
            .get("usageMetadata")
            .and_then(|usage| usage.get("totalTokenCount"))
            .and_then(|t| t.as_u64());

        Ok(AiResponse {
            model: model.to_string(),
            content,
            tokens_used,
            cost_estimate: None,
        })
    }
}

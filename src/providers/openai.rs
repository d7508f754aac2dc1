//! OpenAI chat completions adapter.
//!
//! Also serves OpenAI-compatible gateways: `OPENAI_API_BASE` overrides
//! the API base URL when set.

use async_trait::async_trait;
use reqwest::Client;

use super::{AiResponse, Backend, BackendError};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for the OpenAI chat completions API.
pub struct OpenAiBackend {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl OpenAiBackend {
    /// Create a backend with an explicit key (None = unconfigured).
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    /// Create a backend from `OPENAI_API_KEY`, honoring `OPENAI_API_BASE`.
    pub fn from_env(model: impl Into<String>) -> Self {
        let mut backend = Self::new(std::env::var("OPENAI_API_KEY").ok(), model);
        if let Ok(base_url) = std::env::var("OPENAI_API_BASE") {
            if !base_url.is_empty() {
                backend.base_url = base_url;
            }
        }
        backend
    }

    /// Override the API base URL (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Backend for OpenAiBackend {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn matches_hint(&self, hint: &str) -> bool {
        hint.contains("gpt") || hint.contains("codex")
    }

    async fn invoke(&self, prompt: &str, model: &str) -> Result<AiResponse, BackendError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(BackendError::NotConfigured("openai"))?;

        let body = serde_json::json!({
            "model": model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Api {
                backend: "openai",
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                backend: "openai",
                message: format!("HTTP {status}: {body}"),
            });
        }

        let raw: serde_json::Value = response.json().await.map_err(|e| BackendError::Api {
            backend: "openai",
            message: format!("invalid JSON response: {e}"),
        })?;

        // Content may arrive as a plain string or as an array of
        // content parts depending on the model.
        let content_value = raw
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|arr| arr.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|msg| msg.get("content"));

        let content = match content_value {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Array(parts)) => parts
                .iter()
                .filter_map(|part| {
                    if part.get("type").and_then(|t| t.as_str()) == Some("text") {
                        part.get("text").and_then(|t| t.as_str()).map(|s| s.to_string())
                    } else {
                        None
                    }
                })
                .collect::<Vec<_>>()
                .join(""),
            _ => {
                return Err(BackendError::Api {
                    backend: "openai",
                    message: "response has no message content".to_string(),
                })
            }
        };

        let tokens_used = raw
            .get("usage")
            .and_then(|usage| usage.get("total_tokens"))
            .and_then(|t| t.as_u64());

        Ok(AiResponse {
            model: model.to_string(),
            content,
            tokens_used,
            cost_estimate: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_invoke_parses_string_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{ "message": { "role": "assistant", "content": "hi there" } }],
                "usage": { "total_tokens": 42 }
            })))
            .mount(&server)
            .await;

        let backend =
            OpenAiBackend::new(Some("test-key".to_string()), "gpt-4o").with_base_url(server.uri());
        let response = backend.invoke("hello", backend.model()).await.unwrap();

        assert_eq!(response.model, "gpt-4o");
        assert_eq!(response.content, "hi there");
        assert_eq!(response.tokens_used, Some(42));
    }

    #[tokio::test]
    async fn test_invoke_parses_content_parts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{ "message": { "content": [
                    { "type": "text", "text": "part one " },
                    { "type": "text", "text": "part two" }
                ] } }]
            })))
            .mount(&server)
            .await;

        let backend =
            OpenAiBackend::new(Some("test-key".to_string()), "gpt-4o").with_base_url(server.uri());
        let response = backend.invoke("hello", backend.model()).await.unwrap();

        assert_eq!(response.content, "part one part two");
        assert_eq!(response.tokens_used, None);
    }

    #[tokio::test]
    async fn test_invoke_surfaces_http_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let backend =
            OpenAiBackend::new(Some("test-key".to_string()), "gpt-4o").with_base_url(server.uri());
        let err = backend.invoke("hello", backend.model()).await.unwrap_err();
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_call() {
        let backend = OpenAiBackend::new(None, "gpt-4o").with_base_url("http://127.0.0.1:1");
        let err = backend.invoke("hello", backend.model()).await.unwrap_err();
        assert!(matches!(err, BackendError::NotConfigured("openai")));
    }

    #[test]
    fn test_hint_matching() {
        let backend = OpenAiBackend::new(None, "m");
        assert!(backend.matches_hint("gpt-5"));
        assert!(backend.matches_hint("gpt-4o"));
        assert!(backend.matches_hint("codex"));
        assert!(!backend.matches_hint("claude"));
        assert!(!backend.matches_hint("grok-code-fast"));
    }
}

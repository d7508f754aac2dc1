//! Backend adapters for the model providers.
//!
//! Each adapter wraps one vendor API (or the local CLI tool) behind the
//! [`Backend`] trait so the dispatcher never depends on a concrete
//! vendor type and tests can substitute fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod anthropic;
pub mod cli_tool;
pub mod gemini;
pub mod openai;

pub use anthropic::AnthropicBackend;
pub use cli_tool::CliToolBackend;
pub use gemini::GeminiBackend;
pub use openai::OpenAiBackend;

/// Normalized result of one successful backend invocation.
///
/// `model` always names the model that actually produced the content,
/// never the preference hint that led to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiResponse {
    /// Model that produced the content
    pub model: String,
    /// Response text
    pub content: String,
    /// Total token usage, when the backend reports it
    pub tokens_used: Option<u64>,
    /// Reserved for a future cost model; adapters never set this
    pub cost_estimate: Option<f64>,
}

/// Error from a single backend invocation.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Credentials or executable not present; detected before any
    /// outbound call is attempted.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
    /// The call itself failed: HTTP error, malformed payload, or a
    /// non-zero exit status from the CLI tool.
    #[error("{backend}: {message}")]
    Api {
        backend: &'static str,
        message: String,
    },
}

/// One model provider: a remote API client or the local CLI tool.
///
/// Adapters perform exactly one outbound call per `invoke` and never
/// retry; retry and fallback are the dispatcher's responsibility.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Short provider name used in logs and availability reports.
    fn name(&self) -> &'static str;

    /// The concrete model id this backend invokes by default.
    fn model(&self) -> &str;

    /// Whether credentials (or the executable) are present. Never
    /// performs an outbound call.
    fn is_configured(&self) -> bool;

    /// Whether a preference-chain hint routes to this backend.
    fn matches_hint(&self, hint: &str) -> bool {
        hint.contains(self.name())
    }

    /// Send one prompt to the given model.
    async fn invoke(&self, prompt: &str, model: &str) -> Result<AiResponse, BackendError>;
}

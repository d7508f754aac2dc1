//! Model orchestration: classification, routing, and dispatch.
//!
//! `execute` walks the preference chain for a task category and returns
//! the first successful response. Failures along the chain are logged
//! and swallowed; only when the final CLI fallback also fails does the
//! caller see an error. Every call starts the chain from the top:
//! there is no retry, no backoff, and no memory across calls.

pub mod router;
pub mod task;

pub use router::ModelRouter;
pub use task::{classify, TaskCategory};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::providers::{
    AiResponse, AnthropicBackend, Backend, CliToolBackend, GeminiBackend, OpenAiBackend,
};

/// Error returned when the whole dispatch chain is exhausted.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Every preferred backend and the CLI fallback failed. Carries the
    /// fallback's error text.
    #[error("all backends exhausted: {0}")]
    AllBackendsExhausted(String),
}

/// Dispatches prompts across the configured backends.
pub struct Orchestrator {
    backends: Vec<Box<dyn Backend>>,
    fallback: Box<dyn Backend>,
    router: ModelRouter,
}

impl Orchestrator {
    /// Wire the vendor adapters from the environment and config.
    pub fn new(config: &Config) -> Self {
        let backends: Vec<Box<dyn Backend>> = vec![
            Box::new(AnthropicBackend::from_env(&config.models.anthropic)),
            Box::new(OpenAiBackend::from_env(&config.models.openai)),
            Box::new(GeminiBackend::from_env(&config.models.gemini)),
        ];
        Self {
            backends,
            fallback: Box::new(CliToolBackend::new()),
            router: ModelRouter::from_config(&config.routing),
        }
    }

    /// Substitute backends and routing; used by tests and embedders.
    pub fn with_backends(
        backends: Vec<Box<dyn Backend>>,
        fallback: Box<dyn Backend>,
        router: ModelRouter,
    ) -> Self {
        Self {
            backends,
            fallback,
            router,
        }
    }

    /// Dispatch a prompt.
    ///
    /// Classifies the prompt unless `category` is given, then tries each
    /// backend in the category's preference chain, short-circuiting on
    /// the first success. When the chain is exhausted the local CLI tool
    /// is invoked once as the last resort.
    pub async fn execute(
        &self,
        prompt: &str,
        category: Option<TaskCategory>,
    ) -> Result<AiResponse, DispatchError> {
        let category = category.unwrap_or_else(|| classify(prompt));
        debug!("dispatching as {category}");

        for hint in self.router.preferences_for(category) {
            let Some(backend) = self.backends.iter().find(|b| b.matches_hint(hint)) else {
                debug!("no backend handles preference '{hint}', skipping");
                continue;
            };
            match backend.invoke(prompt, backend.model()).await {
                Ok(response) => {
                    info!("{} answered with {}", backend.name(), response.model);
                    return Ok(response);
                }
                Err(e) => {
                    warn!("{} failed ({e}), trying next", backend.name());
                    continue;
                }
            }
        }

        warn!(
            "all preferred backends failed, falling back to {}",
            self.fallback.name()
        );
        match self.fallback.invoke(prompt, self.fallback.model()).await {
            Ok(response) => Ok(response),
            Err(e) => Err(DispatchError::AllBackendsExhausted(e.to_string())),
        }
    }

    /// Per-backend availability from credentials and executable lookups.
    /// Never performs an invocation.
    pub fn availability(&self) -> Vec<(String, bool)> {
        let mut report: Vec<(String, bool)> = self
            .backends
            .iter()
            .map(|b| (b.name().to_string(), b.is_configured()))
            .collect();
        report.push((self.fallback.name().to_string(), self.fallback.is_configured()));
        for tool in ["codex", "claude"] {
            report.push((format!("{tool}_cli"), which::which(tool).is_ok()));
        }
        report
    }
}

//! End-to-end dispatch scenarios with fake backends.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ai_orchestrator::config::RoutingConfig;
use ai_orchestrator::orchestrator::{classify, ModelRouter, Orchestrator, TaskCategory};
use ai_orchestrator::providers::{AiResponse, Backend, BackendError};
use ai_orchestrator::DispatchError;

struct FakeBackend {
    name: &'static str,
    hint: &'static str,
    model: &'static str,
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl FakeBackend {
    fn new(name: &'static str, hint: &'static str, model: &'static str, fail: bool) -> Self {
        Self {
            name,
            hint,
            model,
            fail,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl Backend for FakeBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    fn model(&self) -> &str {
        self.model
    }

    fn is_configured(&self) -> bool {
        !self.fail
    }

    fn matches_hint(&self, hint: &str) -> bool {
        hint.contains(self.hint)
    }

    async fn invoke(&self, _prompt: &str, model: &str) -> Result<AiResponse, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(BackendError::Api {
                backend: self.name,
                message: format!("{} is down", self.name),
            })
        } else {
            Ok(AiResponse {
                model: model.to_string(),
                content: format!("{} text", self.name),
                tokens_used: Some(11),
                cost_estimate: None,
            })
        }
    }
}

fn router_with(category: &str, hints: &[&str]) -> ModelRouter {
    let mut config = RoutingConfig::default();
    config.chains.insert(
        category.to_string(),
        hints.iter().map(|h| h.to_string()).collect(),
    );
    ModelRouter::from_config(&config)
}

#[tokio::test]
async fn review_prompt_routes_to_first_configured_backend() {
    // "please review this function for bugs" classifies as code_review
    // and the first backend in that chain answers.
    assert_eq!(
        classify("please review this function for bugs"),
        TaskCategory::CodeReview
    );

    let backend_a = FakeBackend::new("backend-a", "alpha", "alpha-model", false);
    let backend_b = FakeBackend::new("backend-b", "beta", "beta-model", false);
    let b_calls = backend_b.calls.clone();

    let orchestrator = Orchestrator::with_backends(
        vec![Box::new(backend_a), Box::new(backend_b)],
        Box::new(FakeBackend::new("cli", "never", "cli-model", false)),
        router_with("code_review", &["alpha", "beta"]),
    );

    let response = orchestrator
        .execute("please review this function for bugs", None)
        .await
        .unwrap();
    assert_eq!(response.model, "alpha-model");
    assert_eq!(response.content, "backend-a text");
    assert_eq!(b_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unmatched_prompt_defaults_to_simple_code() {
    assert_eq!(classify("write a hello world program"), TaskCategory::SimpleCode);

    let backend = FakeBackend::new("backend-a", "alpha", "alpha-model", false);
    let orchestrator = Orchestrator::with_backends(
        vec![Box::new(backend)],
        Box::new(FakeBackend::new("cli", "never", "cli-model", false)),
        router_with("simple_code", &["alpha"]),
    );

    let response = orchestrator
        .execute("write a hello world program", None)
        .await
        .unwrap();
    assert_eq!(response.model, "alpha-model");
}

#[tokio::test]
async fn last_backend_in_chain_can_still_win() {
    let first = FakeBackend::new("first", "one", "one-model", true);
    let second = FakeBackend::new("second", "two", "two-model", true);
    let third = FakeBackend::new("third", "three", "three-model", false);
    let first_calls = first.calls.clone();
    let second_calls = second.calls.clone();

    let orchestrator = Orchestrator::with_backends(
        vec![Box::new(first), Box::new(second), Box::new(third)],
        Box::new(FakeBackend::new("cli", "never", "cli-model", false)),
        router_with("research", &["one", "two", "three"]),
    );

    let response = orchestrator
        .execute("prompt", Some(TaskCategory::Research))
        .await
        .unwrap();
    // Only the succeeding backend shows up in the response.
    assert_eq!(response.model, "three-model");
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn exhausted_chain_falls_back_to_cli_exactly_once() {
    let backend = FakeBackend::new("backend-a", "alpha", "alpha-model", true);
    let fallback = FakeBackend::new("gemini_cli", "never", "gemini-cli", false);
    let fallback_calls = fallback.calls.clone();

    let orchestrator = Orchestrator::with_backends(
        vec![Box::new(backend)],
        Box::new(fallback),
        router_with("documentation", &["alpha"]),
    );

    let response = orchestrator
        .execute("prompt", Some(TaskCategory::Documentation))
        .await
        .unwrap();
    assert_eq!(response.model, "gemini-cli");
    assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn total_exhaustion_returns_the_fallback_error() {
    let backend = FakeBackend::new("backend-a", "alpha", "alpha-model", true);
    let fallback = FakeBackend::new("gemini_cli", "never", "gemini-cli", true);

    let orchestrator = Orchestrator::with_backends(
        vec![Box::new(backend)],
        Box::new(fallback),
        router_with("frontend", &["alpha"]),
    );

    let err = orchestrator
        .execute("prompt", Some(TaskCategory::Frontend))
        .await
        .unwrap_err();
    let DispatchError::AllBackendsExhausted(detail) = err;
    assert!(detail.contains("gemini_cli is down"));
}

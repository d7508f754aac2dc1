//! Local Gemini CLI fallback adapter.
//!
//! Invokes the `gemini` executable in non-interactive mode. This is the
//! last resort after every remote backend has failed, so it never takes
//! part in hint routing.

use async_trait::async_trait;
use tokio::process::Command;

use super::{AiResponse, Backend, BackendError};

const DEFAULT_PROGRAM: &str = "gemini";
const MODEL_NAME: &str = "gemini-cli";

/// Fallback backend that shells out to the Gemini CLI.
pub struct CliToolBackend {
    program: String,
}

impl CliToolBackend {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    /// Use a different executable (used by tests).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for CliToolBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for CliToolBackend {
    fn name(&self) -> &'static str {
        "gemini_cli"
    }

    fn model(&self) -> &str {
        MODEL_NAME
    }

    fn is_configured(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    // Final fallback only; never selected from the preference chain.
    fn matches_hint(&self, _hint: &str) -> bool {
        false
    }

    async fn invoke(&self, prompt: &str, _model: &str) -> Result<AiResponse, BackendError> {
        let output = Command::new(&self.program)
            .arg("-p")
            .arg(prompt)
            .arg("--output-format")
            .arg("json")
            .output()
            .await
            .map_err(|e| BackendError::Api {
                backend: "gemini_cli",
                message: format!("failed to launch {}: {e}", self.program),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BackendError::Api {
                backend: "gemini_cli",
                message: format!("{}: {}", output.status, stderr.trim()),
            });
        }

        Ok(AiResponse {
            model: MODEL_NAME.to_string(),
            content: String::from_utf8_lossy(&output.stdout).to_string(),
            tokens_used: None,
            cost_estimate: None,
        })
    }
}

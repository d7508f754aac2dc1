//! AI Orchestrator - Multi-Model Prompt Routing Library
//!
//! Routes natural-language prompts to the most suitable model:
//! - Keyword-based classification into task categories
//! - Per-category model preference chains with sequential fallback
//! - Vendor API adapters (Anthropic, OpenAI, Gemini) plus a local
//!   Gemini CLI fallback as the last resort
//! - Skill-guided helpers for debugging and frontend work
//!
//! # Example
//!
//! ```ignore
//! use ai_orchestrator::config::Config;
//! use ai_orchestrator::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let orchestrator = Orchestrator::new(&config);
//!     let response = orchestrator.execute("explain this stack trace", None).await?;
//!     println!("{}", response.content);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod helpers;
pub mod orchestrator;
pub mod providers;
pub mod skills;

// Re-export commonly used types for convenience
pub use config::Config;
pub use orchestrator::{classify, DispatchError, ModelRouter, Orchestrator, TaskCategory};
pub use providers::{AiResponse, Backend, BackendError};
pub use skills::SkillLibrary;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

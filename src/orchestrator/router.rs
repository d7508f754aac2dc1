//! Task-to-model preference routing.
//!
//! One immutable table maps each task category to an ordered list of
//! model hints. The dispatcher walks the list in order; keeping the
//! policy in a single table keeps chain changes out of the control flow.

use std::collections::HashMap;

use tracing::warn;

use super::task::TaskCategory;
use crate::config::RoutingConfig;

/// Chain used when a category has no preference entry.
const DEFAULT_CHAIN: &[&str] = &["gemini"];

/// Built-in preference chains (first hint is most preferred).
const DEFAULT_CHAINS: &[(TaskCategory, &[&str])] = &[
    (TaskCategory::SimpleCode, &["gemini", "grok-code-fast"]),
    (TaskCategory::ComplexAlgorithm, &["gpt-5", "claude-opus"]),
    (TaskCategory::CodeReview, &["grok-code-fast", "codex"]),
    (TaskCategory::Debugging, &["claude", "gemini"]),
    (TaskCategory::Documentation, &["gemini", "gpt-4o"]),
    (TaskCategory::Research, &["grok-web", "gemini-search"]),
    (TaskCategory::Frontend, &["claude", "gpt-5"]),
];

/// Immutable mapping from task category to its model preference chain.
pub struct ModelRouter {
    chains: HashMap<TaskCategory, Vec<String>>,
    default_chain: Vec<String>,
}

impl ModelRouter {
    /// Router with the built-in preference chains.
    pub fn new() -> Self {
        let chains = DEFAULT_CHAINS
            .iter()
            .map(|(category, hints)| {
                (*category, hints.iter().map(|h| h.to_string()).collect())
            })
            .collect();
        Self {
            chains,
            default_chain: DEFAULT_CHAIN.iter().map(|h| h.to_string()).collect(),
        }
    }

    /// Router with per-category overrides applied on top of the
    /// built-in chains. Empty override lists are ignored so every
    /// category keeps a non-empty chain.
    pub fn from_config(config: &RoutingConfig) -> Self {
        let mut router = Self::new();
        for (id, hints) in &config.chains {
            let Some(category) = TaskCategory::from_id(id) else {
                warn!("ignoring routing override for unknown category '{id}'");
                continue;
            };
            if hints.is_empty() {
                warn!("ignoring empty routing override for '{id}'");
                continue;
            }
            router.chains.insert(category, hints.clone());
        }
        router
    }

    /// Ordered model hints for a category.
    pub fn preferences_for(&self, category: TaskCategory) -> &[String] {
        self.chains
            .get(&category)
            .map(|chain| chain.as_slice())
            .unwrap_or(&self.default_chain)
    }
}

impl Default for ModelRouter {
    fn default() -> Self {
        Self::new()
    }
}

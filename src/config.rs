//! Configuration management
//!
//! Model assignments per vendor, routing chain overrides, and the skills
//! directory. Everything is read once at startup; nothing mutates the
//! tables during request handling.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Concrete model id used by each vendor adapter
    #[serde(default)]
    pub models: ModelsConfig,
    /// Per-category routing chain overrides
    #[serde(default)]
    pub routing: RoutingConfig,
    /// Skill file settings
    #[serde(default)]
    pub skills: SkillsConfig,
}

/// Concrete model assignments for the vendor adapters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    /// Model invoked through the Anthropic messages API
    #[serde(default = "default_anthropic_model")]
    pub anthropic: String,
    /// Model invoked through the OpenAI chat completions API
    #[serde(default = "default_openai_model")]
    pub openai: String,
    /// Model invoked through the Gemini generateContent API
    #[serde(default = "default_gemini_model")]
    pub gemini: String,
}

fn default_anthropic_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            anthropic: default_anthropic_model(),
            openai: default_openai_model(),
            gemini: default_gemini_model(),
        }
    }
}

/// Routing overrides from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Maps task category id -> ordered list of model hints (first is
    /// preferred). Categories without an entry keep the built-in chain.
    #[serde(default)]
    pub chains: HashMap<String, Vec<String>>,
}

/// Skill file settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Overrides the default `~/.claude/skills` directory
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let config_path = config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            let config: Config = toml::from_str(&contents)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = config_path()?;
        let parent = config_path.parent()
            .context("Config path has no parent")?;

        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }
}

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    let base = directories::ProjectDirs::from("com", "ai-orchestrator", "ai-orchestrator")
        .context("Failed to get project directories")?;
    Ok(base.config_dir().join("config.toml"))
}

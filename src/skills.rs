//! Skill file loading.
//!
//! Skills are externally authored markdown files injected into helper
//! prompts to steer model behavior. A missing skill file is absence,
//! not an error.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::SkillsConfig;

/// Reads skill files from a single directory.
pub struct SkillLibrary {
    dir: PathBuf,
}

impl SkillLibrary {
    /// Library rooted at the configured directory, defaulting to
    /// `~/.claude/skills`.
    pub fn new(config: &SkillsConfig) -> Self {
        let dir = config.dir.clone().unwrap_or_else(default_skills_dir);
        Self { dir }
    }

    /// Library rooted at an explicit directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read a skill file by name. Returns `None` when the file does not
    /// exist or cannot be read.
    pub fn load(&self, name: &str) -> Option<String> {
        let path = self.dir.join(name);
        match std::fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(_) => {
                debug!("skill '{}' not found at {}", name, path.display());
                None
            }
        }
    }
}

fn default_skills_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".claude")
        .join("skills")
}

/// Wrap skill text in its prompt delimiter block.
pub fn wrap_skill(text: &str) -> String {
    format!("<skill>\n{text}\n</skill>")
}

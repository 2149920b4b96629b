//! Shell configuration loaded via OrthoConfig.

use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Prompt written before each command when none is configured.
pub const DEFAULT_PROMPT: &str = "menu> ";

/// Configuration values controlling a shell session.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MENU")]
pub struct ShellSettings {
    /// Seed menu loaded into the store at startup.
    pub seed_path: Option<PathBuf>,
    /// Emit logs as JSON lines instead of human readable text.
    #[ortho_config(default = false)]
    pub log_json: bool,
    /// Prompt override; an empty prompt disables it.
    pub prompt: Option<String>,
}

impl ShellSettings {
    /// Return the configured seed path, if any.
    #[must_use]
    pub fn seed_path(&self) -> Option<&Path> {
        self.seed_path.as_deref()
    }

    /// Return the configured prompt, falling back to [`DEFAULT_PROMPT`].
    #[must_use]
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }
}

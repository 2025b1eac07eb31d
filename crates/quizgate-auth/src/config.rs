//! quizgate configuration.
//!
//! Paths that used to be process-wide constants (question source, result
//! destination, auth endpoint) live here and get passed into the
//! components explicitly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Top-level quizgate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizgateConfig {
    /// Base URL of the authorization service.
    #[serde(default = "default_auth_base_url")]
    pub auth_base_url: String,
    /// Timeout for authorization requests, in seconds. A missing response
    /// is treated the same as a transport failure (denial).
    #[serde(default = "default_auth_timeout_secs")]
    pub auth_timeout_secs: u64,
    /// Whether a run must pass the permission gate.
    #[serde(default = "default_true")]
    pub require_auth: bool,
    /// Default question source path.
    #[serde(default = "default_questions_path")]
    pub questions_path: PathBuf,
    /// Where the result record is written.
    #[serde(default = "default_results_path")]
    pub results_path: PathBuf,
}

fn default_auth_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_auth_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_true() -> bool {
    true
}
fn default_questions_path() -> PathBuf {
    PathBuf::from("questions.json")
}
fn default_results_path() -> PathBuf {
    PathBuf::from("results.json")
}

impl Default for QuizgateConfig {
    fn default() -> Self {
        Self {
            auth_base_url: default_auth_base_url(),
            auth_timeout_secs: default_auth_timeout_secs(),
            require_auth: true,
            questions_path: default_questions_path(),
            results_path: default_results_path(),
        }
    }
}

/// Load config from an explicit path, or search the well-known locations:
///
/// 1. `quizgate.toml` in the current directory
/// 2. `~/.config/quizgate/config.toml`
///
/// Environment variable override: `QUIZGATE_AUTH_URL`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizgateConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizgate.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizgateConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizgateConfig::default(),
    };

    if let Ok(url) = std::env::var("QUIZGATE_AUTH_URL") {
        config.auth_base_url = url;
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizgate"))
}

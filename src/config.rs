use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable that overrides the configured API base URL.
pub const API_URL_ENV: &str = "CQA_API_URL";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Optional whole-request timeout. Absent means no client timeout; a hung
    /// request hangs until interrupted.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api".to_string()
}

impl Config {
    /// Built-in defaults for running against a local backend without any
    /// config file on disk.
    pub fn minimal() -> Self {
        Self {
            api: ApiConfig::default(),
        }
    }

    /// Base URL with the `CQA_API_URL` override applied and any trailing
    /// slash removed, so paths can be joined with a plain `/`.
    pub fn base_url(&self) -> String {
        let url = std::env::var(API_URL_ENV).unwrap_or_else(|_| self.api.base_url.clone());
        url.trim_end_matches('/').to_string()
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.api.base_url.trim().is_empty() {
        anyhow::bail!("api.base_url must not be empty");
    }

    if config.api.timeout_secs == Some(0) {
        anyhow::bail!("api.timeout_secs must be > 0 when set");
    }

    Ok(config)
}

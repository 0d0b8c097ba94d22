//! Configuration loading and management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// LLM provider configuration.
    #[serde(default)]
    pub llm: LlmConfig,
    /// Input and output paths.
    #[serde(default)]
    pub paths: PathsConfig,
}

/// LLM provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model name.
    pub model: String,
    /// API key (optional, can be from env).
    pub api_key: Option<String>,
    /// API base URL (for OpenAI-compatible providers).
    pub base_url: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4".to_string(),
            api_key: None,
            base_url: None,
        }
    }
}

/// Input and output path configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory scanned for daily-log CSV exports.
    pub data_dir: PathBuf,
    /// Root directory for generated artifacts.
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            output_dir: PathBuf::from("output_results"),
        }
    }
}

impl PathsConfig {
    /// Directory for chart images, consumed by the plotting step.
    pub fn graphs_dir(&self) -> PathBuf {
        self.output_dir.join("graphs")
    }

    /// Directory for text reports.
    pub fn reports_dir(&self) -> PathBuf {
        self.output_dir.join("reports")
    }
}

impl AppConfig {
    /// Create a new configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: AppConfig =
            toml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Get API key from config or the `OPENAI_API_KEY` environment variable.
    pub fn api_key(&self) -> Option<String> {
        self.llm
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
    }
}

/// Load configuration from file or fall back to defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    if path.as_ref().exists() {
        AppConfig::from_file(path)
    } else {
        Ok(AppConfig::default())
    }
}

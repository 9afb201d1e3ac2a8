//! Configuration types and loading
//!
//! Configuration is resolved once at process start into an immutable struct
//! and passed by reference into the pipeline. Required secrets are checked
//! up front so a missing credential fails fast instead of surfacing as a
//! per-request error.

use eyre::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::suggest::{ResponseMode, SuggestError};

/// Main taskmuse configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generative provider configuration
    pub llm: LlmConfig,

    /// Task snapshot storage configuration
    pub storage: StorageConfig,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Call this early in startup so an unknown provider or a missing
    /// credential is reported before any request is attempted. Both are
    /// configuration mistakes, never per-call failures.
    pub fn validate(&self) -> Result<()> {
        if self.llm.provider != "gemini" {
            bail!(
                "unknown generative provider: '{}'. Supported: gemini",
                self.llm.provider
            );
        }
        self.llm.api_key()?;
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // Explicit config path is authoritative
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Project-local config: .taskmuse.yml
        let local_config = PathBuf::from(".taskmuse.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // User config: ~/.config/taskmuse/taskmuse.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("taskmuse").join("taskmuse.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Generative provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name (currently only "gemini" supported)
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Reply contract mode, fixed per deployment
    pub mode: ResponseMode,
}

impl LlmConfig {
    /// Resolve the endpoint credential from the configured env var
    pub fn api_key(&self) -> Result<String, SuggestError> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(SuggestError::MissingCredential {
                env: self.api_key_env.clone(),
            }),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_ms: 30_000,
            mode: ResponseMode::Structured,
        }
    }
}

/// Task snapshot storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Snapshot file path; defaults to the platform data directory
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the snapshot path, falling back to the platform default
    pub fn resolve(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("taskmuse")
                .join("tasks.json")
        })
    }
}

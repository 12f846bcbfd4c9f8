// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{ArchitectError, Result};
use crate::models::post::{ApiKey, Settings};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

/// Plain environment variables consulted when no key is configured
const API_KEY_FALLBACK_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. CLI arguments (highest, applied by the caller)
    /// 2. Environment variables (`SOCIAL_ARCHITECT_GEMINI__API_KEY`, ...)
    /// 3. Config file
    /// 4. Defaults (lowest)
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Same as [`AppConfig::load`] with an explicit config file.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p.to_path_buf()).required(true),
            None => File::with_name(&Self::default_config_path()).required(false),
        };

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            // Override with environment variables (prefix: SOCIAL_ARCHITECT_)
            .add_source(
                Environment::with_prefix("SOCIAL_ARCHITECT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| ArchitectError::Config(e.to_string()))?;

        let mut app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| ArchitectError::Config(e.to_string()))?;

        if app_config.gemini.api_key.is_none() {
            app_config.gemini.api_key = API_KEY_FALLBACK_VARS
                .iter()
                .find_map(|var| std::env::var(var).ok())
                .filter(|key| !key.trim().is_empty());
        }

        Ok(app_config)
    }

    /// The configured key, if any
    pub fn api_key(&self) -> Option<ApiKey> {
        self.gemini.api_key.as_deref().and_then(ApiKey::new)
    }

    /// Settings a fresh session starts with. The configured key is not
    /// copied in; it stays the fallback behind any session override.
    pub fn initial_settings(&self) -> Settings {
        Settings {
            api_key: None,
            model_tier: self.defaults.model_tier,
            image_model_tier: self.defaults.image_model_tier,
        }
    }

    /// Effective configuration as TOML with the API key masked.
    pub fn to_redacted_toml(&self) -> Result<String> {
        let mut redacted = self.clone();
        if let Some(key) = self.api_key() {
            redacted.gemini.api_key = Some(format!("[REDACTED {}]", key.fingerprint()));
        }
        toml::to_string_pretty(&redacted).map_err(|e| ArchitectError::Internal(e.to_string()))
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".social-architect")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}

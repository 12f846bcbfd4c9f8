//! Configuration data structures for social-architect.
//!
//! This module defines the schema for the application settings, including
//! server parameters, Gemini API specifics and the initial session tiers.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::models::mapping::DEFAULT_THINKING_BUDGET;
use crate::models::post::{ImageModelTier, ModelTier};
use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port).
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream Gemini API settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Quality tiers a new session starts with.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `8080`
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Settings for the upstream Gemini API connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Base URL for the Generative Language API.
    /// Default: `https://generativelanguage.googleapis.com/v1beta`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// API key used when the session has no override.
    /// Falls back to `GEMINI_API_KEY`, then `API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Connection and request timeout in seconds.
    /// Default: `300` (5 minutes)
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Sampling temperature for the text model.
    /// Default: `0.7`
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Thinking budget in tokens for the "thinking" writing mode.
    /// Default: `2048`
    #[serde(default = "default_thinking_budget")]
    pub thinking_budget: u32,
}

/// Initial quality tiers of a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default: `flash`
    #[serde(default)]
    pub model_tier: ModelTier,

    /// Default: `fast`
    #[serde(default)]
    pub image_model_tier: ImageModelTier,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default trait implementations linking to custom logic

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_key: None,
            timeout_seconds: default_timeout(),
            temperature: default_temperature(),
            thinking_budget: default_thinking_budget(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults and shared constants
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout() -> u64 {
    300
}

fn default_temperature() -> f32 {
    0.7
}

fn default_thinking_budget() -> u32 {
    DEFAULT_THINKING_BUDGET
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

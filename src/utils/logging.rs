//! Structured logging and key redaction utilities.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and providing a helper that keeps
//! Gemini API keys out of logged upstream errors.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::Result;
use regex::Regex;
use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Google API keys (`AIza` + 35 chars) and `key=` query values
static KEY_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_key_regex() -> &'static Regex {
    KEY_REGEX.get_or_init(|| {
        Regex::new(r"AIza[0-9A-Za-z_\-]{10,}|(?i:key=)[^&\s\x22']+").expect("Invalid regex pattern")
    })
}

/// Initializes the global tracing subscriber for the application.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`. Logs go to stderr so CLI output on stdout
/// stays clean.
pub fn init(config: &LoggingConfig) -> Result<()> {
    // Configure filter from environment or config file
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}

/// Replaces every API key found in `input` with a placeholder.
///
/// Upstream error bodies sometimes echo the request URL or the key itself;
/// run them through this before logging.
pub fn sanitize(input: &str) -> String {
    get_key_regex()
        .replace_all(input, |caps: &regex::Captures| {
            if caps[0].to_ascii_lowercase().starts_with("key=") {
                "key=[REDACTED]".to_string()
            } else {
                "[REDACTED_API_KEY]".to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_api_key() {
        let input = "API key not valid: AIzaSyD-abcdefghijklmnopqrstuvwx_12345";
        let output = sanitize(input);
        assert!(output.contains("[REDACTED_API_KEY]"));
        assert!(!output.contains("AIzaSyD"));
    }

    #[test]
    fn test_sanitize_query_key() {
        let output = sanitize("GET /v1beta/models?key=secret123&alt=json");
        assert_eq!(output, "GET /v1beta/models?key=[REDACTED]&alt=json");
    }

    #[test]
    fn test_sanitize_leaves_plain_text() {
        let input = "HTTP 403 Forbidden: PERMISSION_DENIED";
        assert_eq!(sanitize(input), input);
    }
}

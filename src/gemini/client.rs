// Gemini Generative Language API client
// Author: kelexine (https://github.com/kelexine)

use crate::config::GeminiConfig;
use crate::error::{ArchitectError, Result};
use crate::metrics;
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse};
use crate::models::post::ApiKey;
use crate::utils::logging::sanitize;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Client for the Google Gemini API.
///
/// Holds a pooled HTTP client; the API key is supplied per call because the
/// session may swap it at any time. Calls are made exactly once. Failures
/// come back as `ArchitectError::GeminiApi` carrying the HTTP status and
/// upstream message so callers can classify them.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client with connection pooling.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .use_rustls_tls()
            .build()
            .map_err(|e| ArchitectError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client for {}", config.api_base_url);

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(serde::Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
            status: Option<String>,
        }

        if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(response_text) {
            if let Some(error) = error_resp.error {
                return match (error.status, error.message) {
                    (Some(status), Some(message)) => Some(format!("{}: {}", status, message)),
                    (status, message) => message.or(status),
                };
            }
        }
        None
    }

    /// Call Gemini `generateContent` (blocking, single attempt).
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
        api_key: &ApiKey,
    ) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_base_url.trim_end_matches('/'),
            model
        );
        debug!("Calling generateContent API for model: {}", model);

        let start = Instant::now();
        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", api_key.expose())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                metrics::record_gemini_call(model, 0, start.elapsed().as_secs_f64());
                // Never an upstream verdict; the URL stays out of the message
                error!("Gemini transport error: {}", sanitize(&e.to_string()));
                ArchitectError::Http(e.without_url())
            })?;

        let status = response.status();
        metrics::record_gemini_call(model, status.as_u16(), start.elapsed().as_secs_f64());

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = Self::extract_error_message(&error_text).unwrap_or(error_text);
            let message = sanitize(&message);
            error!("Gemini API error: HTTP {} - {}", status, message);
            return Err(ArchitectError::GeminiApi(format!("HTTP {}: {}", status, message)));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ArchitectError::GeminiApi(format!("Failed to read response body: {}", e)))?;

        debug!(
            "Raw Gemini response (first 500 chars): {}",
            response_text.chars().take(500).collect::<String>()
        );

        let gemini_response: GenerateContentResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!("Failed to parse Gemini response: {}", e);
                ArchitectError::GeminiApi(format!("Response parsing error: {}", e))
            })?;

        debug!("Successfully received Gemini response in {:?}", start.elapsed());
        Ok(gemini_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message() {
        let body = r#"{"error":{"code":403,"message":"Method doesn't allow unregistered callers.","status":"PERMISSION_DENIED"}}"#;
        assert_eq!(
            GeminiClient::extract_error_message(body).as_deref(),
            Some("PERMISSION_DENIED: Method doesn't allow unregistered callers.")
        );
        assert_eq!(GeminiClient::extract_error_message("<html>"), None);
    }
}

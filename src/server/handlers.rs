// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::{ArchitectError, Result};
use crate::generator::{SettingsUpdate, SettingsView};
use crate::metrics::gather_metrics;
use crate::models::post::{GeneratedContent, GenerationRequest, ImageModelTier, ModelTier, Platform, PostFormat, Tone};
use crate::prompt::compose;
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub api_key_configured: bool,
    pub model_tier: ModelTier,
    pub image_model_tier: ImageModelTier,
    pub busy: bool,
    pub api_base_url: String,
    pub timestamp: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let settings = state.session.settings();
    let key_configured = settings.api_key.is_some() || state.generator.has_configured_key();

    Json(HealthResponse {
        // Without a key every generation fails, so report degraded
        status: if key_configured { "healthy" } else { "degraded" }.to_string(),
        api_key_configured: key_configured,
        model_tier: settings.model_tier,
        image_model_tier: settings.image_model_tier,
        busy: state.session.is_busy(),
        api_base_url: state.config.gemini.api_base_url.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        gather_metrics(),
    )
}

pub async fn get_settings_handler(State(state): State<AppState>) -> Json<SettingsView> {
    Json(SettingsView::from(&state.session.settings()))
}

pub async fn put_settings_handler(
    State(state): State<AppState>,
    Json(update): Json<SettingsUpdate>,
) -> Json<SettingsView> {
    let settings = state.session.update(update);
    info!(
        "Settings updated: {} / {}, key override: {}",
        settings.model_tier,
        settings.image_model_tier,
        settings.api_key.is_some()
    );
    Json(SettingsView::from(&settings))
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposeRequest {
    pub platform: Platform,
    pub tone: Tone,
    pub format: PostFormat,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeResponse {
    pub system_instruction: String,
}

pub async fn compose_handler(Json(req): Json<ComposeRequest>) -> Json<ComposeResponse> {
    debug!("Composing instruction for {} / {} / {}", req.platform, req.tone, req.format);
    Json(ComposeResponse {
        system_instruction: compose(req.platform, req.tone, req.format),
    })
}

/// Handler for /v1/generate. One generation at a time per session.
pub async fn generate_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<GeneratedContent>> {
    let req: GenerationRequest = serde_json::from_str(&body).map_err(|e| {
        tracing::error!("Failed to deserialize request: {}", e);
        ArchitectError::InvalidRequest(format!("JSON deserialization error: {}", e))
    })?;

    let _guard = state.session.try_begin().ok_or(ArchitectError::Busy)?;
    let settings = state.session.settings();

    let content = state.generator.generate(&req, &settings).await?;
    Ok(Json(content))
}


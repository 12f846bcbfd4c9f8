//! Post generation orchestration.
//!
//! Runs the primary text call and, for image formats, one secondary image
//! call against the Gemini API. Each call is made exactly once. A failed
//! text call is classified into an [`ArchitectError`]; a failed image call
//! is contained in the record's `image_error` and never raised.
//!
//! # Submodules
//!
//! - `image`: Image step outcome and failure classification.
//! - `session`: In-memory settings and the single-flight busy flag.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod image;
pub mod session;

pub use image::{ImageFailure, ImageOutcome};
pub use session::{BusyGuard, Session, SettingsUpdate, SettingsView};

use crate::attachments::to_inline_data;
use crate::config::{AppConfig, GeminiConfig};
use crate::error::{ArchitectError, Result};
use crate::gemini::GeminiClient;
use crate::metrics;
use crate::models::gemini::{
    Content, GenerateContentRequest, GenerationConfig, ImageConfig, Part, SystemInstruction,
    ThinkingConfig, Tool,
};
use crate::models::mapping::{image_model, text_model, thinking_budget};
use crate::models::post::{ApiKey, GeneratedContent, GenerationRequest, ImageModelTier, Settings};
use crate::prompt::{build_user_prompt, compose};
use crate::transform::{transform, ImagePlan};
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Placeholder content when the model returns no text.
pub const EMPTY_RESPONSE_FALLBACK: &str = "Failed to generate content.";

/// Orchestrates one generation from request to normalized record.
#[derive(Clone)]
pub struct PostGenerator {
    client: GeminiClient,
    config: GeminiConfig,
    fallback_key: Option<ApiKey>,
}

impl PostGenerator {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: GeminiClient::new(&config.gemini)?,
            config: config.gemini.clone(),
            fallback_key: config.api_key(),
        })
    }

    /// Whether a key is available without a session override
    pub fn has_configured_key(&self) -> bool {
        self.fallback_key.is_some()
    }

    /// Session override first, then the configured key.
    pub fn resolve_api_key(&self, settings: &Settings) -> Result<ApiKey> {
        settings
            .api_key
            .clone()
            .or_else(|| self.fallback_key.clone())
            .ok_or(ArchitectError::MissingApiKey)
    }

    /// Build the primary text request: attachments first, then the prompt.
    pub fn build_primary_request(&self, request: &GenerationRequest) -> Result<GenerateContentRequest> {
        let mut parts = request
            .attachments
            .iter()
            .map(|attachment| to_inline_data(attachment).map(|inline_data| Part::InlineData { inline_data }))
            .collect::<Result<Vec<_>>>()?;
        parts.push(Part::text(build_user_prompt(request)));

        let tools = request
            .reference_url()
            .map(|_| vec![Tool::google_search()]);

        Ok(GenerateContentRequest {
            contents: vec![Content::user(parts)],
            system_instruction: Some(SystemInstruction::from_text(compose(
                request.platform,
                request.tone,
                request.format,
            ))),
            generation_config: Some(GenerationConfig {
                temperature: Some(self.config.temperature),
                thinking_config: thinking_budget(request.model_type, self.config.thinking_budget)
                    .map(|thinking_budget| ThinkingConfig { thinking_budget }),
                image_config: None,
            }),
            tools,
        })
    }

    /// Build the secondary image request.
    pub fn build_image_request(prompt: &str, aspect_ratio: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text(prompt)])],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: aspect_ratio.to_string(),
                }),
                ..Default::default()
            }),
            tools: None,
        }
    }

    /// Run one generation.
    pub async fn generate(&self, request: &GenerationRequest, settings: &Settings) -> Result<GeneratedContent> {
        if !request.has_subject() {
            return Err(ArchitectError::InvalidRequest(
                "Provide a topic, a reference URL or at least one attachment".to_string(),
            ));
        }

        let api_key = self.resolve_api_key(settings)?;
        let primary = self.build_primary_request(request)?;
        let model = text_model(settings.model_tier);
        let generation_id = Uuid::new_v4();
        let start = Instant::now();

        info!(
            "[{}] Generating {} {} post with {} ({}, key {})",
            generation_id,
            request.platform,
            request.format,
            model,
            request.model_type,
            api_key.fingerprint()
        );
        debug!(
            "[{}] {} attachment(s), reference url: {}",
            generation_id,
            request.attachments.len(),
            request.reference_url().is_some()
        );

        let response = match self.client.generate_content(model, &primary, &api_key).await {
            Ok(response) => response,
            Err(e) => {
                let detail = image::upstream_detail(&e);
                warn!("[{}] Primary generation failed: {}", generation_id, detail);
                let err = match e {
                    ArchitectError::GeminiApi(_) => ArchitectError::classify_upstream(&detail),
                    // Transport failures carry no HTTP status to classify
                    _ => ArchitectError::GenerationFailed(detail),
                };
                self.record(request, outcome_label(&err), model, start);
                return Err(err);
            }
        };

        let raw_text = response
            .text()
            .unwrap_or_else(|| EMPTY_RESPONSE_FALLBACK.to_string());
        debug!("[{}] Primary response: {} chars", generation_id, raw_text.len());

        let transformed = transform(&raw_text, response.grounding_chunks(), request.format);

        let outcome = match transformed.image_plan {
            ImagePlan::NotRequested => ImageOutcome::NotRequested,
            ImagePlan::Unparseable => {
                warn!("[{}] Could not locate an image prompt", generation_id);
                ImageOutcome::Failed(ImageFailure::Unparseable)
            }
            ImagePlan::Generate { prompt, aspect_ratio } => {
                self.generate_image(&prompt, aspect_ratio, settings.image_model_tier, &api_key, generation_id)
                    .await
            }
        };

        match &outcome {
            ImageOutcome::NotRequested => {}
            ImageOutcome::Generated(_) => metrics::record_image_outcome("generated"),
            ImageOutcome::Failed(failure) => metrics::record_image_outcome(failure.metric_label()),
        }

        let (images, image_error) = outcome.into_parts();
        self.record(request, "success", model, start);
        info!(
            "[{}] Generated {} chars, {} hashtag(s), {} source(s), {} image(s) in {:?}",
            generation_id,
            transformed.content.len(),
            transformed.hashtags.len(),
            transformed.sources.len(),
            images.len(),
            start.elapsed()
        );

        Ok(GeneratedContent {
            content: transformed.content,
            hashtags: transformed.hashtags,
            platform: request.platform,
            tone: request.tone,
            sources: transformed.sources,
            images,
            image_error,
        })
    }

    /// Secondary image call. Never fails the generation.
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
        tier: ImageModelTier,
        api_key: &ApiKey,
        generation_id: Uuid,
    ) -> ImageOutcome {
        let model = image_model(tier);
        let request = Self::build_image_request(prompt, aspect_ratio);
        debug!(
            "[{}] Image prompt ({} chars) to {} at {}",
            generation_id,
            prompt.len(),
            model,
            aspect_ratio
        );

        match self.client.generate_content(model, &request, api_key).await {
            Ok(response) => ImageOutcome::Generated(response.inline_images()),
            Err(e) => {
                let detail = image::upstream_detail(&e);
                warn!("[{}] Image generation failed: {}", generation_id, detail);
                ImageOutcome::Failed(ImageFailure::classify(&detail))
            }
        }
    }

    fn record(&self, request: &GenerationRequest, outcome: &str, model: &str, start: Instant) {
        metrics::record_generation(
            request.platform.label(),
            request.format.label(),
            outcome,
            model,
            start.elapsed().as_secs_f64(),
        );
    }
}

fn outcome_label(err: &ArchitectError) -> &'static str {
    match err {
        ArchitectError::BadRequest => "bad_request",
        ArchitectError::InvalidKeyOrQuota => "invalid_key",
        _ => "failed",
    }
}

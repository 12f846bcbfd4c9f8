// Model name mapping (quality tier → Gemini model id)
// Author: kelexine (https://github.com/kelexine)

use super::post::{ImageModelTier, ModelTier, ModelType};

/// Thinking budget sent when the caller picks `ModelType::Thinking`.
/// Accepted by both the Flash and the Pro text models.
pub const DEFAULT_THINKING_BUDGET: u32 = 2048;

/// Map a text quality tier to the Gemini model id
pub fn text_model(tier: ModelTier) -> &'static str {
    match tier {
        ModelTier::Flash => "gemini-2.5-flash",
        ModelTier::Pro => "gemini-3-pro-preview",
    }
}

/// Map an image quality tier to the Gemini image model id
pub fn image_model(tier: ImageModelTier) -> &'static str {
    match tier {
        ImageModelTier::Fast => "gemini-2.5-flash-image",
        ImageModelTier::HighQuality => "gemini-3-pro-image-preview",
    }
}

/// Thinking budget for a writing mode, `None` when thinking is off
pub fn thinking_budget(model_type: ModelType, budget: u32) -> Option<u32> {
    match model_type {
        ModelType::Thinking if budget > 0 => Some(budget),
        _ => None,
    }
}

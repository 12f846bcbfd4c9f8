//! Post-processing of raw model output.
//!
//! Turns the text of a generateContent response into the pieces of a
//! `GeneratedContent` record: dash-free content, hashtags, cited sources,
//! and (for image formats) the plan for the secondary image call. Nothing
//! here performs I/O; the image call itself lives in `generator`.
//!
//! # Submodules
//!
//! - `cleanup`: Dash normalization and hashtag scanning.
//! - `sections`: `[IMAGE_PROMPT]` / `[CAPTION]` parsing.
//! - `sources`: Grounding chunk to citation conversion.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod cleanup;
pub mod sections;
pub mod sources;

pub use cleanup::{extract_hashtags, normalize_dashes};
pub use sections::{caption_after_marker, locate_image_prompt};
pub use sources::extract_sources;

use crate::models::gemini::GroundingChunk;
use crate::models::post::{PostFormat, Source};
use tracing::debug;

/// What the image step should do after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePlan {
    /// The format carries no image.
    NotRequested,
    /// An image format, but no prompt could be located in the text.
    Unparseable,
    /// Call the image model once with this prompt.
    Generate {
        prompt: String,
        aspect_ratio: &'static str,
    },
}

/// Parsed model output, before the image step.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed {
    pub content: String,
    pub hashtags: Vec<String>,
    pub sources: Vec<Source>,
    pub image_plan: ImagePlan,
}

/// Run the text pipeline over raw model output.
///
/// Steps, in order: dash normalization, hashtag scan (over the full
/// text), source extraction, image prompt lookup, caption truncation.
/// The last two only apply to image formats.
pub fn transform(raw_text: &str, grounding: &[GroundingChunk], format: PostFormat) -> Transformed {
    let text = normalize_dashes(raw_text);
    let hashtags = extract_hashtags(&text);
    let sources = extract_sources(grounding);

    if !format.wants_image() {
        return Transformed {
            content: text,
            hashtags,
            sources,
            image_plan: ImagePlan::NotRequested,
        };
    }

    let image_plan = match locate_image_prompt(&text) {
        Some(prompt) => {
            debug!("Located image prompt ({} chars)", prompt.len());
            ImagePlan::Generate {
                prompt,
                aspect_ratio: format.aspect_ratio(),
            }
        }
        None => {
            debug!("No image prompt found in {} chars of output", text.len());
            ImagePlan::Unparseable
        }
    };

    let content = match caption_after_marker(&text) {
        Some(caption) => caption.to_string(),
        None => text,
    };

    Transformed {
        content,
        hashtags,
        sources,
        image_plan,
    }
}

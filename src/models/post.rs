//! Domain types for post generation.
//!
//! These are the values a caller (CLI or HTTP client) selects before a
//! generation and the record it receives afterwards. Every option enum
//! renders its human label through `Display`; that label is what the
//! composed system instruction quotes back to the model.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use zeroize::Zeroize;

/// Target social network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    #[default]
    #[serde(rename = "linkedin", alias = "LinkedIn")]
    #[value(name = "linkedin")]
    LinkedIn,
    #[serde(alias = "Twitter", alias = "x")]
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::LinkedIn, Platform::Twitter];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter",
        }
    }
}

/// Voice of the post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    ThoughtLeader,
    Educational,
    Controversial,
    Storytelling,
    Hiring,
    Humorous,
    Launch,
    CaseStudy,
}

impl Tone {
    pub const ALL: [Tone; 8] = [
        Tone::ThoughtLeader,
        Tone::Educational,
        Tone::Controversial,
        Tone::Storytelling,
        Tone::Hiring,
        Tone::Humorous,
        Tone::Launch,
        Tone::CaseStudy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::ThoughtLeader => "Thought Leader",
            Tone::Educational => "Educational",
            Tone::Controversial => "Controversial",
            Tone::Storytelling => "Storytelling",
            Tone::Hiring => "Hiring & Culture",
            Tone::Humorous => "Viral / Humorous",
            Tone::Launch => "Product Launch",
            Tone::CaseStudy => "Case Study",
        }
    }
}

/// Writing mode. `Thinking` asks the model to reason before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    #[default]
    Writing,
    Thinking,
}

/// Shape of the generated post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PostFormat {
    #[default]
    Standard,
    Carousel,
    Article,
    ImageQuote,
    Infographic,
}

impl PostFormat {
    pub const ALL: [PostFormat; 5] = [
        PostFormat::Standard,
        PostFormat::Carousel,
        PostFormat::Article,
        PostFormat::ImageQuote,
        PostFormat::Infographic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PostFormat::Standard => "Standard Post",
            PostFormat::Carousel => "Carousel",
            PostFormat::Article => "Article",
            PostFormat::ImageQuote => "Quote/Stat",
            PostFormat::Infographic => "Infographic",
        }
    }

    /// Formats whose output carries an `[IMAGE_PROMPT]` section.
    pub fn wants_image(&self) -> bool {
        matches!(self, PostFormat::ImageQuote | PostFormat::Infographic)
    }

    /// Aspect ratio requested from the image model.
    pub fn aspect_ratio(&self) -> &'static str {
        match self {
            PostFormat::Infographic => "3:4",
            _ => "1:1",
        }
    }
}

/// Text model quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ModelTier {
    #[default]
    Flash,
    Pro,
}

impl ModelTier {
    pub fn label(&self) -> &'static str {
        match self {
            ModelTier::Flash => "Gemini 2.5 Flash",
            ModelTier::Pro => "Gemini 3 Pro",
        }
    }
}

/// Image model quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ImageModelTier {
    #[default]
    Fast,
    HighQuality,
}

impl ImageModelTier {
    pub fn label(&self) -> &'static str {
        match self {
            ImageModelTier::Fast => "Nano Banana (Fast)",
            ImageModelTier::HighQuality => "Nano Banana Pro (High Quality)",
        }
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_label!(Platform, Tone, PostFormat, ModelTier, ImageModelTier);

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelType::Writing => f.write_str("Writing"),
            ModelType::Thinking => f.write_str("Thinking"),
        }
    }
}

/// Gemini API key held in memory for the session.
#[derive(Clone, PartialEq, Eq, Zeroize)]
#[zeroize(drop)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for blank input so an empty override falls through.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Short SHA-256 prefix, safe to log or show back to a client.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        hex::encode(&digest[..4])
    }
}

// Never print the key itself
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey([REDACTED] {})", self.fingerprint())
    }
}

/// Per-session settings. Never written to disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Overrides the configured key when present.
    pub api_key: Option<ApiKey>,
    pub model_tier: ModelTier,
    pub image_model_tier: ImageModelTier,
}

/// A user-supplied file, base64 encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    #[serde(alias = "type")]
    pub mime_type: String,
    /// Raw base64, or a `data:<mime>;base64,<payload>` URL.
    pub data: String,
}

/// Everything a single generation needs from the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    pub topic: String,
    pub context: String,
    pub platform: Platform,
    pub tone: Tone,
    pub model_type: ModelType,
    pub format: PostFormat,
    pub url: Option<String>,
    pub attachments: Vec<Attachment>,
}

impl GenerationRequest {
    /// Reference URL, ignoring blank strings.
    pub fn reference_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    /// A request needs something to write about.
    pub fn has_subject(&self) -> bool {
        !self.topic.trim().is_empty() || self.reference_url().is_some() || !self.attachments.is_empty()
    }
}

/// A cited web source from search grounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub uri: String,
    pub title: String,
}

/// The normalized result handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub content: String,
    pub hashtags: Vec<String>,
    pub platform: Platform,
    pub tone: Tone,
    pub sources: Vec<Source>,
    /// Base64 image payloads, in response order.
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_prompt_vocabulary() {
        assert_eq!(Tone::Hiring.to_string(), "Hiring & Culture");
        assert_eq!(Tone::Humorous.to_string(), "Viral / Humorous");
        assert_eq!(PostFormat::ImageQuote.to_string(), "Quote/Stat");
        assert_eq!(Platform::Twitter.to_string(), "Twitter");
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(PostFormat::Infographic.aspect_ratio(), "3:4");
        assert_eq!(PostFormat::ImageQuote.aspect_ratio(), "1:1");
    }

    #[test]
    fn test_blank_api_key_is_none() {
        assert!(ApiKey::new("   ").is_none());
        assert_eq!(ApiKey::new(" abc ").unwrap().expose(), "abc");
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("AIzaSecretValue").unwrap();
        let debug = format!("{:?}", key);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("AIzaSecretValue"));
        assert_eq!(key.fingerprint().len(), 8);
    }

    #[test]
    fn test_request_deserializes_with_defaults() {
        let req: GenerationRequest =
            serde_json::from_str(r#"{"topic":"RAG security","format":"infographic"}"#).unwrap();
        assert_eq!(req.platform, Platform::LinkedIn);
        assert_eq!(req.tone, Tone::ThoughtLeader);
        assert_eq!(req.format, PostFormat::Infographic);
        assert!(req.has_subject());
    }

    #[test]
    fn test_blank_url_is_no_subject() {
        let req = GenerationRequest {
            url: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(req.reference_url().is_none());
        assert!(!req.has_subject());
    }

    #[test]
    fn test_generated_content_serializes_camel_case() {
        let content = GeneratedContent {
            content: "hi".to_string(),
            hashtags: vec![],
            platform: Platform::LinkedIn,
            tone: Tone::Launch,
            sources: vec![],
            images: vec![],
            image_error: Some("nope".to_string()),
        };
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["imageError"], "nope");
        assert_eq!(json["tone"], "launch");
    }
}

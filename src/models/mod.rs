//! Data models for the generator and the Gemini API.
//!
//! This module contains the type definitions used by:
//! - The caller-facing request/result records (`post`)
//! - The upstream Google Gemini API (`gemini`)
//! - Quality tier to model id mapping (`mapping`)

// Author: kelexine (https://github.com/kelexine)

pub mod gemini;
pub mod mapping;
pub mod post;

pub use gemini::{Content, GenerateContentRequest, GenerateContentResponse, GroundingChunk, Part};
pub use mapping::{image_model, text_model};
pub use post::{
    ApiKey, Attachment, GeneratedContent, GenerationRequest, ImageModelTier, ModelTier, ModelType,
    Platform, PostFormat, Settings, Source, Tone,
};

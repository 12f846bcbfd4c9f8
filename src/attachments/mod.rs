//! Attachment handling for the primary generation call.
//!
//! Attachments arrive as base64 (optionally wrapped in a data URL) from the
//! HTTP API, or as local paths from the CLI. Either way they end up as
//! Gemini `InlineData` parts placed ahead of the text prompt.
//!
//! # Submodules
//!
//! - `models`: Attachment kinds, MIME detection and size limits.
//! - `inline`: Conversion of caller attachments into upload parts.
//! - `loader`: Concurrent loading of local files.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod inline;
pub mod loader;
pub mod models;

pub use inline::to_inline_data;
pub use loader::{load_attachment, load_attachments};

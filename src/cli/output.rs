// Plain-text rendering and image export for the CLI
// Author: kelexine (https://github.com/kelexine)

use crate::error::{ArchitectError, Result};
use crate::models::post::GeneratedContent;
use base64::Engine;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Render a generation result for a terminal.
pub fn render_text(content: &GeneratedContent) -> String {
    let mut out = String::new();
    out.push_str(content.content.trim_end());
    out.push('\n');

    if !content.hashtags.is_empty() {
        let _ = write!(out, "\nHashtags: {}\n", content.hashtags.join(" "));
    }

    if !content.sources.is_empty() {
        out.push_str("\nSources:\n");
        for source in &content.sources {
            let _ = writeln!(out, "  - {} <{}>", source.title, source.uri);
        }
    }

    if !content.images.is_empty() {
        let _ = write!(out, "\nImages: {}\n", content.images.len());
    }
    if let Some(error) = &content.image_error {
        let _ = write!(out, "\nImage error: {}\n", error);
    }

    out
}

/// Decode every image payload into `dir` as `image-<n>.png`.
pub async fn save_images(images: &[String], dir: &Path) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir).await?;

    let mut written = Vec::with_capacity(images.len());
    for (i, payload) in images.iter().enumerate() {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|e| ArchitectError::Internal(format!("Image {} is not valid base64: {}", i + 1, e)))?;
        let path = dir.join(format!("image-{}.png", i + 1));
        tokio::fs::write(&path, &bytes).await?;
        info!("Saved {} ({} bytes)", path.display(), bytes.len());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::post::{Platform, Source, Tone};

    fn sample() -> GeneratedContent {
        GeneratedContent {
            content: "Ship it.\n".to_string(),
            hashtags: vec!["#AI".to_string(), "#Ops".to_string()],
            platform: Platform::LinkedIn,
            tone: Tone::Launch,
            sources: vec![Source {
                uri: "https://example.com".to_string(),
                title: "Example".to_string(),
            }],
            images: vec![],
            image_error: Some("Could not parse image prompt from content.".to_string()),
        }
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample());
        assert!(text.starts_with("Ship it.\n"));
        assert!(text.contains("Hashtags: #AI #Ops"));
        assert!(text.contains("  - Example <https://example.com>"));
        assert!(text.contains("Image error: Could not parse"));
        assert!(!text.contains("Images:"));
    }

    #[tokio::test]
    async fn test_save_images() {
        let dir = tempfile::tempdir().unwrap();
        let images = vec!["aGVsbG8=".to_string(), "d29ybGQ=".to_string()];

        let paths = save_images(&images, &dir.path().join("out")).await.unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(std::fs::read(&paths[1]).unwrap(), b"world");
    }

    #[tokio::test]
    async fn test_save_images_rejects_bad_payload() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_images(&["%%%".to_string()], dir.path()).await.unwrap_err();
        assert!(matches!(err, ArchitectError::Internal(_)));
    }
}

// Attachment loading from local files
// Author: kelexine (https://github.com/kelexine)

use super::models::{detect_mime_type, mime_from_extension, validate_attachment_size};
use crate::error::{ArchitectError, Result};
use crate::models::post::Attachment;
use base64::Engine;
use futures::future::try_join_all;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read one file and encode it as an attachment.
pub async fn load_attachment(path: &Path) -> Result<Attachment> {
    let bytes = tokio::fs::read(path).await?;
    validate_attachment_size(bytes.len()).map_err(ArchitectError::InvalidRequest)?;

    let mime_type = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_from_extension)
        .or_else(|| detect_mime_type(&bytes))
        .unwrap_or("application/octet-stream");

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    debug!("Loaded attachment {} ({} bytes, {})", name, bytes.len(), mime_type);

    Ok(Attachment {
        name,
        mime_type: mime_type.to_string(),
        data: base64::engine::general_purpose::STANDARD.encode(&bytes),
    })
}

/// Read every file concurrently. All reads finish (or the first error
/// returns) before anything is handed back; input order is preserved.
pub async fn load_attachments(paths: &[PathBuf]) -> Result<Vec<Attachment>> {
    try_join_all(paths.iter().map(|p| load_attachment(p))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_text_file() {
        let mut file = tempfile::Builder::new().suffix(".md").tempfile().unwrap();
        write!(file, "# Notes").unwrap();

        let attachment = load_attachment(file.path()).await.unwrap();
        assert_eq!(attachment.mime_type, "text/markdown");
        assert_eq!(attachment.data, "IyBOb3Rlcw==");
    }

    #[tokio::test]
    async fn test_load_detects_pdf_without_extension() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.4 minimal").unwrap();

        let attachment = load_attachment(file.path()).await.unwrap();
        assert_eq!(attachment.mime_type, "application/pdf");
    }

    #[tokio::test]
    async fn test_load_many_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.txt");
        let second = dir.path().join("b.csv");
        std::fs::write(&first, "a").unwrap();
        std::fs::write(&second, "b,c").unwrap();

        let loaded = load_attachments(&[first, second]).await.unwrap();
        assert_eq!(loaded[0].name, "a.txt");
        assert_eq!(loaded[1].mime_type, "text/csv");
    }

    #[tokio::test]
    async fn test_missing_file_fails() {
        let result = load_attachments(&[PathBuf::from("/definitely/not/here.png")]).await;
        assert!(matches!(result, Err(ArchitectError::Io(_))));
    }
}

// Attachment → Gemini InlineData conversion
// Author: kelexine (https://github.com/kelexine)

use super::models::{detect_mime_type, validate_attachment_size, AttachmentKind};
use crate::error::{ArchitectError, Result};
use crate::models::gemini::InlineData;
use crate::models::post::Attachment;
use base64::Engine;
use tracing::debug;

/// Split a `data:<mime>;base64,<payload>` URL into its MIME type and payload.
/// Plain base64 passes through with no MIME type.
pub fn split_data_url(data: &str) -> (Option<&str>, &str) {
    match data.split_once("base64,") {
        Some((header, payload)) => {
            let mime = header
                .strip_prefix("data:")
                .map(|h| h.trim_end_matches(';'))
                .filter(|m| !m.is_empty());
            (mime, payload)
        }
        None => (None, data),
    }
}

/// Convert a caller attachment into an inline upload part
pub fn to_inline_data(attachment: &Attachment) -> Result<InlineData> {
    let (url_mime, payload) = split_data_url(&attachment.data);
    let payload = payload.trim();

    // Decode to validate and get size
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| {
            ArchitectError::InvalidRequest(format!(
                "Invalid base64 data in attachment '{}': {}",
                attachment.name, e
            ))
        })?;

    validate_attachment_size(decoded.len()).map_err(ArchitectError::InvalidRequest)?;

    // Declared type first, then the data URL header, then magic bytes
    let mime_type = Some(attachment.mime_type.trim())
        .filter(|m| !m.is_empty())
        .or(url_mime)
        .or_else(|| detect_mime_type(&decoded))
        .ok_or_else(|| {
            ArchitectError::InvalidRequest(format!(
                "Could not detect file type of attachment '{}'",
                attachment.name
            ))
        })?;

    let kind = AttachmentKind::from_mime_type(mime_type).ok_or_else(|| {
        ArchitectError::InvalidRequest(format!(
            "Unsupported attachment type '{}' for '{}'",
            mime_type, attachment.name
        ))
    })?;

    debug!(
        "Attachment '{}' uploaded inline as {:?} ({}, {} bytes)",
        attachment.name,
        kind,
        mime_type,
        decoded.len()
    );

    // Gemini expects bare base64 (no "data:...;base64," prefix)
    Ok(InlineData {
        mime_type: mime_type.to_string(),
        data: payload.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tiny 1x1 PNG
    const PNG_DATA: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

    fn attachment(mime: &str, data: &str) -> Attachment {
        Attachment {
            name: "file".to_string(),
            mime_type: mime.to_string(),
            data: data.to_string(),
        }
    }

    #[test]
    fn test_data_url_prefix_is_stripped() {
        let data = format!("data:image/png;base64,{PNG_DATA}");
        let inline = to_inline_data(&attachment("image/png", &data)).unwrap();
        assert_eq!(inline.mime_type, "image/png");
        assert_eq!(inline.data, PNG_DATA);
    }

    #[test]
    fn test_mime_from_data_url_header() {
        let data = format!("data:image/png;base64,{PNG_DATA}");
        let inline = to_inline_data(&attachment("", &data)).unwrap();
        assert_eq!(inline.mime_type, "image/png");
    }

    #[test]
    fn test_mime_detected_from_bytes() {
        let inline = to_inline_data(&attachment("", PNG_DATA)).unwrap();
        assert_eq!(inline.mime_type, "image/png");
    }

    #[test]
    fn test_text_attachment() {
        // "hello notes"
        let inline = to_inline_data(&attachment("text/plain", "aGVsbG8gbm90ZXM=")).unwrap();
        assert_eq!(inline.mime_type, "text/plain");
    }

    #[test]
    fn test_unsupported_type() {
        let result = to_inline_data(&attachment("application/zip", "dGVzdA=="));
        assert!(matches!(result, Err(ArchitectError::InvalidRequest(_))));
    }

    #[test]
    fn test_invalid_base64() {
        let result = to_inline_data(&attachment("image/png", "not-valid-base64!!!"));
        assert!(result.is_err());
    }

    #[test]
    fn test_split_plain_base64() {
        assert_eq!(split_data_url("QUJD"), (None, "QUJD"));
        assert_eq!(
            split_data_url("data:application/pdf;base64,QUJD"),
            (Some("application/pdf"), "QUJD")
        );
    }
}

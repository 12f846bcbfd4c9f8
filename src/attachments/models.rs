// Attachment kinds and limits
// Author: kelexine (https://github.com/kelexine)

/// Broad class of an attachment, decided from its MIME type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Pdf,
    Text,
    Audio,
    Video,
}

impl AttachmentKind {
    /// Try to classify a MIME type the Gemini API accepts inline
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_lowercase();
        match mime.as_str() {
            "image/jpeg" | "image/jpg" | "image/png" | "image/webp" | "image/gif" | "image/heic"
            | "image/heif" => Some(AttachmentKind::Image),
            "application/pdf" => Some(AttachmentKind::Pdf),
            "application/json" | "application/xml" => Some(AttachmentKind::Text),
            m if m.starts_with("text/") => Some(AttachmentKind::Text),
            m if m.starts_with("audio/") => Some(AttachmentKind::Audio),
            m if m.starts_with("video/") => Some(AttachmentKind::Video),
            _ => None,
        }
    }
}

/// Validation limits
pub const MAX_ATTACHMENT_SIZE_BYTES: usize = 20 * 1024 * 1024; // 20MB (Gemini inline limit)

/// Validate decoded attachment size
pub fn validate_attachment_size(data_len: usize) -> Result<(), String> {
    if data_len > MAX_ATTACHMENT_SIZE_BYTES {
        return Err(format!(
            "Attachment size {} bytes exceeds maximum of {} bytes (20MB)",
            data_len, MAX_ATTACHMENT_SIZE_BYTES
        ));
    }
    Ok(())
}

/// Guess a MIME type from a file extension
pub fn mime_from_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "pdf" => Some("application/pdf"),
        "txt" => Some("text/plain"),
        "md" | "markdown" => Some("text/markdown"),
        "csv" => Some("text/csv"),
        "html" | "htm" => Some("text/html"),
        "json" => Some("application/json"),
        "mp3" => Some("audio/mpeg"),
        "wav" => Some("audio/wav"),
        "mp4" => Some("video/mp4"),
        _ => None,
    }
}

/// Detect MIME type from magic bytes at the start of the data
pub fn detect_mime_type(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(b"%PDF-") {
        return Some("application/pdf");
    }
    if data.len() < 12 {
        return None;
    }

    if data.starts_with(b"\xFF\xD8\xFF") {
        Some("image/jpeg")
    } else if data.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("image/png")
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if data.starts_with(b"RIFF") && data[8..12] == *b"WEBP" {
        Some("image/webp")
    } else if data[4..12] == *b"ftypheic" || data[4..12] == *b"ftypheix" {
        Some("image/heic")
    } else {
        None
    }
}

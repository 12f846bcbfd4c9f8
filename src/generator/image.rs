// Image step outcome and failure classification
// Author: kelexine (https://github.com/kelexine)

use crate::error::ArchitectError;

/// Why no image came back. Never fatal to a generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageFailure {
    /// No image prompt could be located in the model output.
    Unparseable,
    /// The key may not use the selected image model.
    PermissionDenied,
    /// The image model does not exist or is not enabled for the key.
    ModelNotFound,
    /// Anything else, with the upstream detail.
    Failed(String),
}

impl ImageFailure {
    /// Classify a failed image call by its error text.
    pub fn classify(detail: &str) -> Self {
        if detail.contains("403") || detail.contains("PERMISSION_DENIED") || detail.contains("permission") {
            ImageFailure::PermissionDenied
        } else if detail.contains("404") || detail.contains("not found") {
            ImageFailure::ModelNotFound
        } else {
            ImageFailure::Failed(detail.to_string())
        }
    }

    /// Human-readable diagnostic shown next to the post.
    pub fn message(&self) -> String {
        match self {
            ImageFailure::Unparseable => "Could not parse image prompt from content.".to_string(),
            ImageFailure::PermissionDenied => "Permission Denied: Your API key cannot access 'Nano Banana Pro'. \
                Try using 'Nano Banana (Fast)' in settings."
                .to_string(),
            ImageFailure::ModelNotFound => {
                "Model Not Found: Model not enabled for this API key. Try 'Nano Banana (Fast)'.".to_string()
            }
            ImageFailure::Failed(detail) if detail.trim().is_empty() => {
                "Generation Failed: Unknown error".to_string()
            }
            ImageFailure::Failed(detail) => format!("Generation Failed: {}", detail),
        }
    }

    pub fn metric_label(&self) -> &'static str {
        match self {
            ImageFailure::Unparseable => "unparseable",
            ImageFailure::PermissionDenied => "permission_denied",
            ImageFailure::ModelNotFound => "model_not_found",
            ImageFailure::Failed(_) => "failed",
        }
    }
}

/// Result of the optional image step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    NotRequested,
    /// Inline payloads in response order; may be empty.
    Generated(Vec<String>),
    Failed(ImageFailure),
}

impl ImageOutcome {
    /// Split into the record's `images` and `image_error` fields.
    pub fn into_parts(self) -> (Vec<String>, Option<String>) {
        match self {
            ImageOutcome::NotRequested => (Vec::new(), None),
            ImageOutcome::Generated(images) => (images, None),
            ImageOutcome::Failed(failure) => (Vec::new(), Some(failure.message())),
        }
    }
}

/// Upstream detail text of an error, without the variant prefix.
pub(crate) fn upstream_detail(err: &ArchitectError) -> String {
    match err {
        ArchitectError::GeminiApi(detail) => detail.clone(),
        other => other.to_string(),
    }
}

// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{
    gather_metrics, GEMINI_API_CALLS, GEMINI_API_DURATION, GENERATIONS_TOTAL, GENERATION_DURATION,
    IMAGE_GENERATIONS,
};

/// Helper to record a finished generation
pub fn record_generation(platform: &str, format: &str, outcome: &str, model: &str, duration_secs: f64) {
    GENERATIONS_TOTAL
        .with_label_values(&[platform, format, outcome])
        .inc();

    GENERATION_DURATION
        .with_label_values(&[model])
        .observe(duration_secs);
}

/// Helper to record Gemini API call metrics
pub fn record_gemini_call(model: &str, status_code: u16, duration_secs: f64) {
    GEMINI_API_CALLS
        .with_label_values(&[model, &status_code.to_string()])
        .inc();

    GEMINI_API_DURATION
        .with_label_values(&[model])
        .observe(duration_secs);
}

/// Helper to record the outcome of the image step
pub fn record_image_outcome(outcome: &str) {
    IMAGE_GENERATIONS.with_label_values(&[outcome]).inc();
}

//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with structured fields.

use crate::models::{LanguageVerdict, PredictionResult};

/// Log a field classification.
pub fn field_classified(selector: &str, result: &PredictionResult, stage: &str) {
    tracing::debug!(
        event = "field_classified",
        selector = %selector,
        input_type = ?result.input_type,
        inputmode = ?result.inputmode,
        confidence = result.confidence,
        stage = %stage,
        "field classified"
    );
}

/// Log a language verdict for a document.
pub fn language_detected(domain: &str, verdict: &LanguageVerdict) {
    tracing::info!(
        event = "language_detected",
        domain = %domain,
        is_japanese = verdict.is_japanese,
        confidence = verdict.confidence,
        method = %verdict.method,
        "language detected"
    );
}

/// Log a site being enabled by language auto-detection.
pub fn site_auto_enabled(domain: &str) {
    tracing::info!(
        event = "site_auto_enabled",
        domain = %domain,
        "site auto-enabled for Japanese content"
    );
}

/// Log a saved field override taking precedence over prediction.
pub fn field_override_applied(domain: &str, selector: &str) {
    tracing::debug!(
        event = "field_override_applied",
        domain = %domain,
        selector = %selector,
        "saved field settings applied"
    );
}

/// Log a failed settings request.
pub fn request_failed(request: &str, reason: &str) {
    tracing::warn!(
        event = "request_failed",
        request = %request,
        reason = %reason,
        "settings request failed"
    );
}

use imeopt_core::constants::{JAPANESE_LANGUAGE_TAG, JAPANESE_THRESHOLD};
use imeopt_core::models::LanguageVerdict;
use imeopt_core::traits::{IDocumentSource, ILanguageDetector};

use crate::sampling::document_sample;
use crate::script::script_counts;

/// Stateless Japanese-language detector.
#[derive(Debug, Clone, Copy, Default)]
pub struct JapaneseDetector;

impl JapaneseDetector {
    pub fn new() -> Self {
        Self
    }
}

fn is_japanese_tag(tag: &str) -> bool {
    let tag = tag.to_lowercase();
    tag == JAPANESE_LANGUAGE_TAG
        || tag
            .strip_prefix(JAPANESE_LANGUAGE_TAG)
            .is_some_and(|rest| rest.starts_with('-'))
}

impl ILanguageDetector for JapaneseDetector {
    fn from_declared_tag(&self, tag: Option<&str>) -> LanguageVerdict {
        match tag {
            Some(tag) if !tag.is_empty() => LanguageVerdict::declared(is_japanese_tag(tag)),
            _ => LanguageVerdict::none(),
        }
    }

    fn from_text(&self, text: &str) -> LanguageVerdict {
        let (japanese, total) = script_counts(text);
        if total == 0 {
            return LanguageVerdict::content(false, 0.0);
        }
        let ratio = japanese as f64 / total as f64;
        LanguageVerdict::content(ratio >= JAPANESE_THRESHOLD, ratio)
    }

    fn from_document(&self, document: &dyn IDocumentSource) -> LanguageVerdict {
        let declared = self.from_declared_tag(document.declared_language().as_deref());
        if declared.is_japanese && declared.confidence >= 1.0 {
            tracing::debug!(method = %declared.method, "document language declared");
            return declared;
        }

        let sample = document_sample(document);
        let verdict = self.from_text(&sample);
        tracing::debug!(
            sample_chars = sample.chars().count(),
            is_japanese = verdict.is_japanese,
            confidence = verdict.confidence,
            "document language from content"
        );
        verdict
    }
}

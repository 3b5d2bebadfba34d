use crate::models::LanguageVerdict;

use super::IDocumentSource;

/// Japanese-language detection. All entry points are total and pure.
pub trait ILanguageDetector: Send + Sync {
    /// Verdict from a declared language tag such as `ja-JP`.
    fn from_declared_tag(&self, tag: Option<&str>) -> LanguageVerdict;

    /// Verdict from the script composition of free text.
    fn from_text(&self, text: &str) -> LanguageVerdict;

    /// Verdict for a whole document: declared tag first, then a text sample.
    fn from_document(&self, document: &dyn IDocumentSource) -> LanguageVerdict;
}

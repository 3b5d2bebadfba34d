//! Text sample used for document-level detection.

use imeopt_core::constants::{HEADING_TAGS, MAX_SAMPLED_PARAGRAPHS};
use imeopt_core::traits::IDocumentSource;

/// Title, every heading (h1 through h6, tag by tag), then the first
/// paragraphs. Each part is trimmed; empty parts are dropped.
///
/// The paragraph cap counts paragraphs, not non-empty ones.
pub fn document_sample(document: &dyn IDocumentSource) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(title) = document.title() {
        parts.push(title);
    }
    for tag in HEADING_TAGS {
        parts.extend(document.texts_by_tag(tag));
    }
    parts.extend(
        document
            .texts_by_tag("p")
            .into_iter()
            .take(MAX_SAMPLED_PARAGRAPHS),
    );

    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fraction of non-whitespace characters that must be Japanese for text to count as Japanese.
pub const JAPANESE_THRESHOLD: f64 = 0.2;

/// Confidence assigned when a field already declares a recognized type.
pub const DECLARED_TYPE_CONFIDENCE: f64 = 0.95;

/// Primary language subtag for Japanese.
pub const JAPANESE_LANGUAGE_TAG: &str = "ja";

/// Upper bound on paragraphs sampled from a document for content analysis.
pub const MAX_SAMPLED_PARAGRAPHS: usize = 10;

/// Heading tags sampled from a document, in sampling order.
pub const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Store key holding the global settings record.
pub const GLOBAL_SETTINGS_KEY: &str = "global";

/// Store key holding the per-domain site settings map.
pub const SITE_SETTINGS_KEY: &str = "sites";

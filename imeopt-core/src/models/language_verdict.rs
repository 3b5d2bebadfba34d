use std::fmt;

use serde::{Deserialize, Serialize};

/// Which method produced a [`LanguageVerdict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionMethod {
    DeclaredTag,
    ContentAnalysis,
    None,
}

impl DetectionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeclaredTag => "declared-tag",
            Self::ContentAnalysis => "content-analysis",
            Self::None => "none",
        }
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether some content is Japanese, how sure we are, and how we decided.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageVerdict {
    pub is_japanese: bool,
    pub confidence: f64,
    pub method: DetectionMethod,
}

impl LanguageVerdict {
    /// No evidence at all. Always `{false, 0, none}`.
    pub fn none() -> Self {
        Self {
            is_japanese: false,
            confidence: 0.0,
            method: DetectionMethod::None,
        }
    }

    pub fn declared(is_japanese: bool) -> Self {
        Self {
            is_japanese,
            confidence: 1.0,
            method: DetectionMethod::DeclaredTag,
        }
    }

    pub fn content(is_japanese: bool, confidence: f64) -> Self {
        Self {
            is_japanese,
            confidence,
            method: DetectionMethod::ContentAnalysis,
        }
    }
}

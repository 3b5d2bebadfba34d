use serde::{Deserialize, Serialize};

use super::{Glyph, InputAttributes, InputMode, InputType};

/// Output of the field-type predictor.
///
/// When both `input_type` and `inputmode` are absent the result is the
/// unknown sentinel: confidence 0 and [`Glyph::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputmode: Option<InputMode>,
    pub glyph: Glyph,
    pub confidence: f64,
}

impl PredictionResult {
    pub fn new(attributes: InputAttributes, glyph: Glyph, confidence: f64) -> Self {
        Self {
            input_type: attributes.input_type,
            inputmode: attributes.inputmode,
            glyph,
            confidence,
        }
    }

    /// The "no match" result.
    pub fn unknown() -> Self {
        Self {
            input_type: None,
            inputmode: None,
            glyph: Glyph::Unknown,
            confidence: 0.0,
        }
    }

    pub fn attributes(&self) -> InputAttributes {
        InputAttributes::new(self.input_type, self.inputmode)
    }

    pub fn is_unknown(&self) -> bool {
        self.attributes().is_empty()
    }
}

impl Default for PredictionResult {
    fn default() -> Self {
        Self::unknown()
    }
}

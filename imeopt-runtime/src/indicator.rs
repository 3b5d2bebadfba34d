//! Indicators shown next to a resolved field.

use imeopt_core::models::{FieldSettings, Glyph, InputMode, InputType, PredictionResult};
use imeopt_document::{Document, NodeId};

/// Class carried by indicator elements.
pub const INDICATOR_CLASS: &str = "ime-optimizer-indicator";

const CUSTOM_LABEL_PREFIX: &str = "カスタム設定";
const PREDICTED_LABEL_PREFIX: &str = "AI推測";
const CONFIDENCE_LABEL: &str = "信頼度";

/// Glyph for a saved override.
pub fn glyph_for_settings(settings: &FieldSettings) -> Glyph {
    match settings.input_type {
        Some(InputType::Email) => return Glyph::Email,
        Some(InputType::Tel) => return Glyph::Tel,
        Some(InputType::Url) => return Glyph::Url,
        Some(InputType::Password) => return Glyph::Password,
        Some(InputType::Search) => return Glyph::Search,
        _ => {}
    }
    if settings.input_type == Some(InputType::Number)
        || settings.inputmode == Some(InputMode::Numeric)
    {
        return Glyph::Numeric;
    }
    if settings.inputmode == Some(InputMode::Text) {
        return Glyph::Text;
    }
    Glyph::Unknown
}

/// `<type>[, <inputmode>]`, where a missing type reads as `text`.
fn describe(input_type: Option<InputType>, inputmode: Option<InputMode>) -> String {
    let input_type = input_type.unwrap_or(InputType::Text);
    match inputmode {
        Some(mode) => format!("{input_type}, {mode}"),
        None => input_type.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub glyph: Glyph,
    /// Tooltip text.
    pub label: String,
    /// True for saved overrides, false for predictions.
    pub custom: bool,
}

impl Indicator {
    pub fn for_settings(settings: &FieldSettings) -> Self {
        Self {
            glyph: glyph_for_settings(settings),
            label: format!(
                "{CUSTOM_LABEL_PREFIX}: {}",
                describe(settings.input_type, settings.inputmode)
            ),
            custom: true,
        }
    }

    pub fn for_prediction(prediction: &PredictionResult) -> Self {
        let percent = (prediction.confidence * 100.0).round() as u32;
        Self {
            glyph: prediction.glyph,
            label: format!(
                "{PREDICTED_LABEL_PREFIX}: {} ({CONFIDENCE_LABEL}: {percent}%)",
                describe(prediction.input_type, prediction.inputmode)
            ),
            custom: false,
        }
    }

    /// Place this indicator in the field's parent, replacing any earlier one.
    /// Returns `None` when the field has no parent.
    pub fn attach(&self, document: &mut Document, field: NodeId) -> Option<NodeId> {
        let parent = document.parent(field)?;
        for stale in indicators_in(document, parent) {
            document.detach(stale);
        }

        let span = document.append_element(parent, "span");
        document.set_attr(span, "class", INDICATOR_CLASS);
        document.set_attr(span, "title", self.label.as_str());
        document.set_attr(span, "data-custom", if self.custom { "true" } else { "false" });
        document.append_text(span, self.glyph.symbol());
        Some(span)
    }
}

/// Indicator elements under `scope`.
pub fn indicators_in(document: &Document, scope: NodeId) -> Vec<NodeId> {
    document
        .descendants(scope)
        .into_iter()
        .filter(|id| {
            document
                .attr(*id, "class")
                .is_some_and(|class| class.split_whitespace().any(|c| c == INDICATOR_CLASS))
        })
        .collect()
}

//! Saved override vs. prediction for one field.

use imeopt_core::models::{FieldSettings, PredictionResult};
use imeopt_document::{Document, NodeId};

use crate::indicator::Indicator;

const TYPE_ATTR: &str = "type";
const INPUTMODE_ATTR: &str = "inputmode";
const TEXT_TYPE: &str = "text";

#[derive(Debug, Clone, PartialEq)]
pub enum FieldResolution {
    /// A saved override exists and always applies.
    Saved(FieldSettings),
    /// No override; the prediction carries a type or an inputmode.
    Predicted(PredictionResult),
    /// No override and nothing usable predicted.
    Untouched,
}

impl FieldResolution {
    pub fn resolve(saved: Option<FieldSettings>, prediction: PredictionResult) -> Self {
        match saved {
            Some(settings) => Self::Saved(settings),
            None if prediction.is_unknown() => Self::Untouched,
            None => Self::Predicted(prediction),
        }
    }

    /// Write the resolved attributes onto the field.
    pub fn apply(&self, document: &mut Document, field: NodeId) {
        match self {
            Self::Saved(settings) => apply_field_settings(document, field, settings),
            Self::Predicted(prediction) => apply_prediction(document, field, prediction),
            Self::Untouched => {}
        }
    }

    pub fn indicator(&self) -> Option<Indicator> {
        match self {
            Self::Saved(settings) => Some(Indicator::for_settings(settings)),
            Self::Predicted(prediction) => Some(Indicator::for_prediction(prediction)),
            Self::Untouched => None,
        }
    }

    pub fn is_untouched(&self) -> bool {
        matches!(self, Self::Untouched)
    }
}

/// A saved type replaces the current type whenever it differs.
pub fn apply_field_settings(document: &mut Document, field: NodeId, settings: &FieldSettings) {
    if let Some(input_type) = settings.input_type {
        if document.input_type(field).as_deref() != Some(input_type.as_str()) {
            document.set_attr(field, TYPE_ATTR, input_type.as_str());
        }
    }
    if let Some(mode) = settings.inputmode {
        document.set_attr(field, INPUTMODE_ATTR, mode.as_str());
    }
}

/// A predicted type only replaces a plain `text` type.
pub fn apply_prediction(document: &mut Document, field: NodeId, prediction: &PredictionResult) {
    if let Some(input_type) = prediction.input_type {
        let current = document.input_type(field);
        if current.as_deref() == Some(TEXT_TYPE) && input_type.as_str() != TEXT_TYPE {
            document.set_attr(field, TYPE_ATTR, input_type.as_str());
        }
    }
    if let Some(mode) = prediction.inputmode {
        document.set_attr(field, INPUTMODE_ATTR, mode.as_str());
    }
}

//! # imeopt-predictor
//!
//! Field-type predictor. Classifies a form field from its descriptive text
//! through a fixed decision chain: declared type, then format-pattern
//! overrides, then an ordered keyword scan, then the unknown fallback.
//! No state, no failure modes.

pub mod engine;
pub mod extraction;
pub mod keywords;
pub mod patterns;
pub mod rules;

pub use engine::{ClassificationStage, FieldTypePredictor};
pub use extraction::extract_descriptor;
pub use patterns::FormatOverride;
pub use rules::{ClassificationRule, RuleCategory};

use rayon::prelude::*;

use imeopt_core::constants::DECLARED_TYPE_CONFIDENCE;
use imeopt_core::models::{FieldDescriptor, PredictionResult};
use imeopt_core::traits::{IFieldClassifier, ILiveField};

use crate::extraction::extract_descriptor;
use crate::keywords;
use crate::patterns::{self, FormatOverride};
use crate::rules::{self, ClassificationRule, RuleCategory};

/// Which stage of the decision chain produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationStage {
    DeclaredType,
    FormatOverride(FormatOverride),
    Keyword(RuleCategory),
    Unknown,
}

impl ClassificationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeclaredType => "declared-type",
            Self::FormatOverride(_) => "format-override",
            Self::Keyword(_) => "keyword",
            Self::Unknown => "unknown",
        }
    }
}

/// Stateless field-type predictor.
///
/// Decision chain: declared type, format overrides, keyword scan, unknown.
/// Each stage is a guard clause that returns on its first hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldTypePredictor;

impl FieldTypePredictor {
    pub fn new() -> Self {
        Self
    }

    /// Classify and report which stage decided.
    pub fn classify_with_stage(
        &self,
        descriptor: &FieldDescriptor,
    ) -> (PredictionResult, ClassificationStage) {
        if let Some(rule) = descriptor
            .declared_type
            .as_deref()
            .and_then(rules::rule_for_declared_type)
        {
            return (
                PredictionResult::new(rule.attributes, rule.glyph, DECLARED_TYPE_CONFIDENCE),
                ClassificationStage::DeclaredType,
            );
        }

        let search_text = descriptor.search_text();

        if let Some((format, rule)) =
            patterns::detect_format(&search_text).and_then(|f| f.rule().map(|r| (f, r)))
        {
            return (from_rule(rule), ClassificationStage::FormatOverride(format));
        }

        if let Some(rule) = keywords::first_matching_rule(&search_text) {
            return (from_rule(rule), ClassificationStage::Keyword(rule.category));
        }

        (PredictionResult::unknown(), ClassificationStage::Unknown)
    }

    /// Classify many descriptors in parallel. Output order matches input order.
    pub fn classify_all(&self, descriptors: &[FieldDescriptor]) -> Vec<PredictionResult> {
        descriptors.par_iter().map(|d| self.classify(d)).collect()
    }
}

fn from_rule(rule: &ClassificationRule) -> PredictionResult {
    PredictionResult::new(rule.attributes, rule.glyph, rule.confidence)
}

impl IFieldClassifier for FieldTypePredictor {
    fn classify(&self, descriptor: &FieldDescriptor) -> PredictionResult {
        let (result, stage) = self.classify_with_stage(descriptor);
        tracing::trace!(
            stage = stage.as_str(),
            input_type = ?result.input_type,
            confidence = result.confidence,
            "classified field descriptor"
        );
        result
    }

    fn classify_element(&self, field: &dyn ILiveField) -> PredictionResult {
        self.classify(&extract_descriptor(field))
    }
}

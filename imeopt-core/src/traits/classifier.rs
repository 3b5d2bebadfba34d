use crate::models::{FieldDescriptor, PredictionResult};

use super::ILiveField;

/// Field-type classification.
///
/// Implementations are total: an unrecognizable field yields the unknown
/// result, never an error.
pub trait IFieldClassifier: Send + Sync {
    /// Classify a caller-built descriptor.
    fn classify(&self, descriptor: &FieldDescriptor) -> PredictionResult;

    /// Extract a descriptor from a live field, then classify it.
    fn classify_element(&self, field: &dyn ILiveField) -> PredictionResult;
}

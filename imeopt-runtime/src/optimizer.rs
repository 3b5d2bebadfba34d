//! Per-document orchestration.
//!
//! One optimizer serves one document on one domain. Each candidate field is
//! resolved at most once; fields inserted later go through
//! [`Optimizer::process_added`].

use std::collections::HashSet;
use std::sync::Arc;

use imeopt_core::events;
use imeopt_core::models::FieldSettings;
use imeopt_core::traits::{IFieldClassifier, IKeyValueStore};
use imeopt_core::ImeResult;
use imeopt_document::{Document, NodeId};
use imeopt_language::JapaneseDetector;
use imeopt_predictor::{extract_descriptor, FieldTypePredictor};
use imeopt_settings::SettingsManager;

use crate::enablement::{decide_enablement, SiteDecision};
use crate::indicator::Indicator;
use crate::resolution::{apply_field_settings, apply_prediction, FieldResolution};
use crate::selector::generate_selector;

pub struct Optimizer<S: IKeyValueStore> {
    settings: Arc<SettingsManager<S>>,
    predictor: FieldTypePredictor,
    detector: JapaneseDetector,
    domain: String,
    enabled: bool,
    processed: HashSet<NodeId>,
}

impl<S: IKeyValueStore> Optimizer<S> {
    pub fn new(settings: Arc<SettingsManager<S>>, domain: impl Into<String>) -> Self {
        Self {
            settings,
            predictor: FieldTypePredictor::new(),
            detector: JapaneseDetector::new(),
            domain: domain.into(),
            enabled: false,
            processed: HashSet::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    /// Decide enablement and, when enabled, process every existing field.
    pub async fn initialize(&mut self, document: &mut Document) -> ImeResult<SiteDecision> {
        let decision =
            decide_enablement(&*self.settings, &self.detector, &*document, &self.domain).await?;
        self.enabled = decision.enabled;
        tracing::info!(
            domain = %self.domain,
            enabled = decision.enabled,
            reason = ?decision.reason,
            "optimizer initialized"
        );
        if self.enabled {
            self.process_document(document).await;
        }
        Ok(decision)
    }

    /// Process all candidate fields. Returns how many were changed.
    pub async fn process_document(&mut self, document: &mut Document) -> usize {
        let fields = document.candidate_fields();
        self.process_fields(document, fields).await
    }

    /// Process candidate fields in a subtree inserted after initialization.
    pub async fn process_added(&mut self, document: &mut Document, node: NodeId) -> usize {
        let fields = document.candidate_fields_in(node);
        self.process_fields(document, fields).await
    }

    /// A failing field is logged and skipped; the rest are still processed.
    async fn process_fields(&mut self, document: &mut Document, fields: Vec<NodeId>) -> usize {
        if !self.enabled {
            return 0;
        }
        let mut changed = 0;
        for field in fields {
            match self.process_field(document, field).await {
                Ok(Some(resolution)) if !resolution.is_untouched() => changed += 1,
                Ok(_) => {}
                Err(e) => tracing::warn!(
                    domain = %self.domain,
                    field = field.index(),
                    error = %e,
                    "failed to process field"
                ),
            }
        }
        changed
    }

    /// Resolve and apply one field. `None` when it was already processed.
    pub async fn process_field(
        &mut self,
        document: &mut Document,
        field: NodeId,
    ) -> ImeResult<Option<FieldResolution>> {
        if !self.processed.insert(field) {
            return Ok(None);
        }

        let selector = generate_selector(&document.field(field));
        let saved = self
            .settings
            .field_settings(&self.domain, &selector)
            .await?;

        let resolution = match saved {
            Some(settings) => {
                events::field_override_applied(&self.domain, &selector);
                FieldResolution::Saved(settings)
            }
            None => {
                let descriptor = extract_descriptor(&document.field(field));
                let (prediction, stage) = self.predictor.classify_with_stage(&descriptor);
                events::field_classified(&selector, &prediction, stage.as_str());
                FieldResolution::resolve(None, prediction)
            }
        };

        resolution.apply(document, field);
        if let Some(indicator) = resolution.indicator() {
            indicator.attach(document, field);
        }
        Ok(Some(resolution))
    }

    /// Persist an override for `field`, then apply it.
    pub async fn save_field_override(
        &mut self,
        document: &mut Document,
        field: NodeId,
        settings: FieldSettings,
    ) -> ImeResult<()> {
        let selector = generate_selector(&document.field(field));
        self.settings
            .set_field_settings(&self.domain, &selector, settings)
            .await?;
        apply_field_settings(document, field, &settings);
        Indicator::for_settings(&settings).attach(document, field);
        self.processed.insert(field);
        Ok(())
    }

    /// Drop the saved override for `field` and fall back to the prediction.
    pub async fn reset_field(
        &mut self,
        document: &mut Document,
        field: NodeId,
    ) -> ImeResult<FieldResolution> {
        let selector = generate_selector(&document.field(field));
        self.settings
            .remove_field_settings(&self.domain, &selector)
            .await?;

        let prediction = self
            .predictor
            .classify(&extract_descriptor(&document.field(field)));
        apply_prediction(document, field, &prediction);
        Indicator::for_prediction(&prediction).attach(document, field);
        Ok(FieldResolution::resolve(None, prediction))
    }
}

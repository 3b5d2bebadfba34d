//! Whether the optimizer runs on a site.
//!
//! Order: the global switch, then a saved site entry, then language
//! auto-detection when the global auto-enable switch is on.

use imeopt_core::events;
use imeopt_core::models::SiteSettings;
use imeopt_core::traits::{IDocumentSource, IKeyValueStore, ILanguageDetector};
use imeopt_core::ImeResult;
use imeopt_settings::SettingsManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnablementReason {
    GloballyDisabled,
    SiteSetting,
    AutoDetected,
    NotJapanese,
    AutoDetectDisabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteDecision {
    pub enabled: bool,
    pub reason: EnablementReason,
}

impl SiteDecision {
    fn new(enabled: bool, reason: EnablementReason) -> Self {
        Self { enabled, reason }
    }
}

/// Decide enablement for `domain`. An auto-detected Japanese site is
/// persisted as enabled so later visits skip detection.
pub async fn decide_enablement<S: IKeyValueStore>(
    settings: &SettingsManager<S>,
    detector: &dyn ILanguageDetector,
    document: &dyn IDocumentSource,
    domain: &str,
) -> ImeResult<SiteDecision> {
    let global = settings.global_settings().await?;
    if !global.enabled {
        return Ok(SiteDecision::new(false, EnablementReason::GloballyDisabled));
    }

    if let Some(site) = settings.site_settings(domain).await? {
        return Ok(SiteDecision::new(site.enabled, EnablementReason::SiteSetting));
    }

    if !global.auto_enable_japanese_sites {
        return Ok(SiteDecision::new(false, EnablementReason::AutoDetectDisabled));
    }

    let verdict = detector.from_document(document);
    events::language_detected(domain, &verdict);
    if !verdict.is_japanese {
        return Ok(SiteDecision::new(false, EnablementReason::NotJapanese));
    }

    let site = SiteSettings::new(true, settings.defaults().site_ime_mode);
    settings.set_site_settings(domain, site).await?;
    events::site_auto_enabled(domain);
    Ok(SiteDecision::new(true, EnablementReason::AutoDetected))
}

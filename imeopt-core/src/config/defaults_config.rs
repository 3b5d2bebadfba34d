use serde::{Deserialize, Serialize};

use crate::models::{GlobalSettings, ImeMode, SiteSettings};

/// Values written to the store when nothing has been saved yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Global settings returned when the store has none and written on install.
    pub global: GlobalSettings,
    /// IME mode given to site entries created implicitly.
    pub site_ime_mode: ImeMode,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            global: GlobalSettings::default(),
            site_ime_mode: ImeMode::Auto,
        }
    }
}

impl DefaultsConfig {
    /// Site entry used when a field override is saved for an unknown domain.
    pub fn site(&self) -> SiteSettings {
        SiteSettings {
            default_ime_mode: self.site_ime_mode,
            ..SiteSettings::default()
        }
    }
}

//! User preferences persisted through the injected key-value store.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{InputMode, InputType};
use crate::config::defaults;

/// Extension-wide switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSettings {
    pub enabled: bool,
    /// Enable the optimizer automatically on sites detected as Japanese.
    pub auto_enable_japanese_sites: bool,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_ENABLED,
            auto_enable_japanese_sites: defaults::DEFAULT_AUTO_ENABLE_JAPANESE_SITES,
        }
    }
}

/// Preferred IME state for a site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImeMode {
    On,
    Off,
    #[default]
    Auto,
}

impl ImeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Auto => "auto",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" => Some(Self::On),
            "off" => Some(Self::Off),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }
}

impl fmt::Display for ImeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A saved override for one field, keyed by its selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSettings {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputmode: Option<InputMode>,
}

/// Per-domain preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default = "default_site_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub default_ime_mode: ImeMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, FieldSettings>>,
}

fn default_site_enabled() -> bool {
    defaults::DEFAULT_SITE_ENABLED
}

impl SiteSettings {
    /// Site entry with the given enabled flag and no field overrides.
    pub fn new(enabled: bool, default_ime_mode: ImeMode) -> Self {
        Self {
            enabled,
            default_ime_mode,
            fields: None,
        }
    }

    pub fn field(&self, selector: &str) -> Option<&FieldSettings> {
        self.fields.as_ref()?.get(selector)
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_SITE_ENABLED, ImeMode::default())
    }
}

/// Everything the store holds, as exported and imported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageData {
    pub global: GlobalSettings,
    pub sites: BTreeMap<String, SiteSettings>,
}

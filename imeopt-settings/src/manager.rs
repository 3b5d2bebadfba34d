//! Typed preferences over an [`IKeyValueStore`].
//!
//! Site writes are read-modify-write on the shared `sites` entry, so they are
//! serialized through a single async lock.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;

use imeopt_core::config::DefaultsConfig;
use imeopt_core::constants::{GLOBAL_SETTINGS_KEY, SITE_SETTINGS_KEY};
use imeopt_core::errors::{SettingsError, SettingsResult};
use imeopt_core::models::{FieldSettings, GlobalSettings, SiteSettings, StorageData};
use imeopt_core::traits::IKeyValueStore;

type SiteMap = BTreeMap<String, SiteSettings>;

pub struct SettingsManager<S: IKeyValueStore> {
    store: S,
    defaults: DefaultsConfig,
    sites_lock: Mutex<()>,
}

impl<S: IKeyValueStore> SettingsManager<S> {
    pub fn new(store: S) -> Self {
        Self::with_defaults(store, DefaultsConfig::default())
    }

    pub fn with_defaults(store: S, defaults: DefaultsConfig) -> Self {
        Self {
            store,
            defaults,
            sites_lock: Mutex::new(()),
        }
    }

    pub fn defaults(&self) -> &DefaultsConfig {
        &self.defaults
    }

    // ── Global ────────────────────────────────────────────────────────────

    /// Saved global settings, or the configured defaults when none are saved.
    pub async fn global_settings(&self) -> SettingsResult<GlobalSettings> {
        Ok(self
            .read(GLOBAL_SETTINGS_KEY)
            .await?
            .unwrap_or(self.defaults.global))
    }

    pub async fn set_global_settings(&self, settings: &GlobalSettings) -> SettingsResult<()> {
        self.write(GLOBAL_SETTINGS_KEY, settings).await?;
        tracing::debug!(
            enabled = settings.enabled,
            auto_enable = settings.auto_enable_japanese_sites,
            "global settings saved"
        );
        Ok(())
    }

    // ── Sites ─────────────────────────────────────────────────────────────

    pub async fn site_settings(&self, domain: &str) -> SettingsResult<Option<SiteSettings>> {
        Ok(self.sites().await?.remove(domain))
    }

    pub async fn set_site_settings(
        &self,
        domain: &str,
        settings: SiteSettings,
    ) -> SettingsResult<()> {
        let _guard = self.sites_lock.lock().await;
        let mut sites = self.sites().await?;
        sites.insert(domain.to_string(), settings);
        self.write(SITE_SETTINGS_KEY, &sites).await?;
        tracing::debug!(domain = %domain, "site settings saved");
        Ok(())
    }

    /// Remove a site entry. The `sites` key is dropped once no site is left.
    pub async fn remove_site_settings(&self, domain: &str) -> SettingsResult<()> {
        let _guard = self.sites_lock.lock().await;
        let mut sites = self.sites().await?;
        if sites.remove(domain).is_none() {
            return Ok(());
        }
        if sites.is_empty() {
            self.store.remove(SITE_SETTINGS_KEY).await?;
        } else {
            self.write(SITE_SETTINGS_KEY, &sites).await?;
        }
        tracing::debug!(domain = %domain, remaining = sites.len(), "site settings removed");
        Ok(())
    }

    pub async fn all_site_settings(&self) -> SettingsResult<SiteMap> {
        self.sites().await
    }

    async fn sites(&self) -> SettingsResult<SiteMap> {
        Ok(self.read(SITE_SETTINGS_KEY).await?.unwrap_or_default())
    }

    // ── Fields ────────────────────────────────────────────────────────────

    pub async fn field_settings(
        &self,
        domain: &str,
        selector: &str,
    ) -> SettingsResult<Option<FieldSettings>> {
        Ok(self
            .site_settings(domain)
            .await?
            .and_then(|site| site.field(selector).copied()))
    }

    /// Save a field override, creating a default site entry when needed.
    pub async fn set_field_settings(
        &self,
        domain: &str,
        selector: &str,
        settings: FieldSettings,
    ) -> SettingsResult<()> {
        let _guard = self.sites_lock.lock().await;
        let mut sites = self.sites().await?;
        sites
            .entry(domain.to_string())
            .or_insert_with(|| self.defaults.site())
            .fields
            .get_or_insert_with(BTreeMap::new)
            .insert(selector.to_string(), settings);
        self.write(SITE_SETTINGS_KEY, &sites).await?;
        tracing::debug!(domain = %domain, selector = %selector, "field settings saved");
        Ok(())
    }

    /// Remove a field override. The site entry itself is kept.
    pub async fn remove_field_settings(&self, domain: &str, selector: &str) -> SettingsResult<()> {
        let _guard = self.sites_lock.lock().await;
        let mut sites = self.sites().await?;
        let Some(fields) = sites.get_mut(domain).and_then(|site| site.fields.as_mut()) else {
            return Ok(());
        };
        fields.remove(selector);
        self.write(SITE_SETTINGS_KEY, &sites).await
    }

    // ── Whole store ───────────────────────────────────────────────────────

    pub async fn clear_all(&self) -> SettingsResult<()> {
        let _guard = self.sites_lock.lock().await;
        self.store.clear().await?;
        tracing::info!("all settings cleared");
        Ok(())
    }

    /// Snapshot of everything stored, with defaults filled in.
    pub async fn export_data(&self) -> SettingsResult<StorageData> {
        let mut data = StorageData {
            global: self.defaults.global,
            sites: SiteMap::new(),
        };
        for (key, value) in self.store.entries().await? {
            match key.as_str() {
                GLOBAL_SETTINGS_KEY => data.global = decode(&key, value)?,
                SITE_SETTINGS_KEY => data.sites = decode(&key, value)?,
                _ => {}
            }
        }
        Ok(data)
    }

    /// Overwrite the global and site entries with `data`.
    pub async fn import_data(&self, data: &StorageData) -> SettingsResult<()> {
        let _guard = self.sites_lock.lock().await;
        self.write(GLOBAL_SETTINGS_KEY, &data.global).await?;
        self.write(SITE_SETTINGS_KEY, &data.sites).await?;
        tracing::info!(sites = data.sites.len(), "settings imported");
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    async fn read<T: DeserializeOwned>(&self, key: &str) -> SettingsResult<Option<T>> {
        match self.store.get(key).await? {
            Some(Value::Null) | None => Ok(None),
            Some(value) => decode(key, value).map(Some),
        }
    }

    async fn write<T: Serialize>(&self, key: &str, value: &T) -> SettingsResult<()> {
        let value = serde_json::to_value(value).map_err(|e| SettingsError::Serialization {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.store.set(key, value).await
    }
}

fn decode<T: DeserializeOwned>(key: &str, value: Value) -> SettingsResult<T> {
    serde_json::from_value(value).map_err(|e| SettingsError::Serialization {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

use std::collections::BTreeMap;

use serde_json::{json, Value};

use imeopt_core::config::DefaultsConfig;
use imeopt_core::errors::{SettingsError, SettingsResult};
use imeopt_core::models::{
    FieldSettings, GlobalSettings, ImeMode, InputMode, InputType, SiteSettings, StorageData,
};
use imeopt_core::traits::IKeyValueStore;
use imeopt_settings::{MemoryStore, SettingsManager};

fn manager() -> (SettingsManager<MemoryStore>, MemoryStore) {
    let store = MemoryStore::new();
    (SettingsManager::new(store.clone()), store)
}

fn email_field() -> FieldSettings {
    FieldSettings {
        input_type: Some(InputType::Email),
        inputmode: Some(InputMode::Email),
    }
}

// ── Global ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn global_defaults_when_store_is_empty() {
    let (manager, store) = manager();
    let global = manager.global_settings().await.unwrap();
    assert_eq!(global, GlobalSettings::default());
    assert!(global.enabled);
    assert!(global.auto_enable_japanese_sites);
    assert!(store.is_empty(), "reading defaults must not write");
}

#[tokio::test]
async fn global_round_trip_uses_camel_case_on_the_wire() {
    let (manager, store) = manager();
    let settings = GlobalSettings {
        enabled: false,
        auto_enable_japanese_sites: false,
    };
    manager.set_global_settings(&settings).await.unwrap();
    assert_eq!(manager.global_settings().await.unwrap(), settings);
    assert_eq!(
        store.peek("global"),
        Some(json!({"enabled": false, "autoEnableJapaneseSites": false}))
    );
}

#[tokio::test]
async fn configured_defaults_are_used() {
    let defaults = DefaultsConfig {
        global: GlobalSettings {
            enabled: true,
            auto_enable_japanese_sites: false,
        },
        site_ime_mode: ImeMode::On,
    };
    let manager = SettingsManager::with_defaults(MemoryStore::new(), defaults);
    assert!(!manager.global_settings().await.unwrap().auto_enable_japanese_sites);

    manager
        .set_field_settings("example.jp", "input#q", FieldSettings::default())
        .await
        .unwrap();
    let site = manager.site_settings("example.jp").await.unwrap().unwrap();
    assert_eq!(site.default_ime_mode, ImeMode::On);
}

// ── Sites ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn unknown_site_is_absent() {
    let (manager, _) = manager();
    assert_eq!(manager.site_settings("example.com").await.unwrap(), None);
    assert!(manager.all_site_settings().await.unwrap().is_empty());
}

#[tokio::test]
async fn site_set_get_remove() {
    let (manager, _) = manager();
    let site = SiteSettings::new(false, ImeMode::Off);
    manager.set_site_settings("example.com", site.clone()).await.unwrap();
    manager
        .set_site_settings("example.jp", SiteSettings::default())
        .await
        .unwrap();

    assert_eq!(manager.site_settings("example.com").await.unwrap(), Some(site));
    assert_eq!(manager.all_site_settings().await.unwrap().len(), 2);

    manager.remove_site_settings("example.com").await.unwrap();
    assert_eq!(manager.site_settings("example.com").await.unwrap(), None);
    assert!(manager.site_settings("example.jp").await.unwrap().is_some());
}

#[tokio::test]
async fn removing_unknown_site_is_a_no_op() {
    let (manager, store) = manager();
    manager.remove_site_settings("nowhere.example").await.unwrap();
    assert!(manager.all_site_settings().await.unwrap().is_empty());
    assert!(store.is_empty(), "a no-op removal must not write");
}

#[tokio::test]
async fn removing_last_site_drops_sites_key() {
    let (manager, store) = manager();
    manager
        .set_site_settings("example.jp", SiteSettings::default())
        .await
        .unwrap();
    assert!(store.peek("sites").is_some());

    manager.remove_site_settings("example.jp").await.unwrap();
    assert!(store.peek("sites").is_none());
    assert!(manager.all_site_settings().await.unwrap().is_empty());
    assert_eq!(
        manager.export_data().await.unwrap().sites,
        BTreeMap::new()
    );
}

// ── Fields ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn field_settings_materialize_default_site() {
    let (manager, _) = manager();
    manager
        .set_field_settings("example.jp", "input#email", email_field())
        .await
        .unwrap();

    let site = manager.site_settings("example.jp").await.unwrap().unwrap();
    assert!(site.enabled);
    assert_eq!(site.default_ime_mode, ImeMode::Auto);
    assert_eq!(site.field("input#email"), Some(&email_field()));
    assert_eq!(
        manager.field_settings("example.jp", "input#email").await.unwrap(),
        Some(email_field())
    );
}

#[tokio::test]
async fn field_settings_keep_existing_site_flags() {
    let (manager, _) = manager();
    manager
        .set_site_settings("example.jp", SiteSettings::new(false, ImeMode::On))
        .await
        .unwrap();
    manager
        .set_field_settings("example.jp", "input[name=\"tel\"]", FieldSettings::default())
        .await
        .unwrap();

    let site = manager.site_settings("example.jp").await.unwrap().unwrap();
    assert!(!site.enabled);
    assert_eq!(site.default_ime_mode, ImeMode::On);
    assert_eq!(site.fields.map(|f| f.len()), Some(1));
}

#[tokio::test]
async fn removing_field_keeps_site_entry() {
    let (manager, _) = manager();
    manager
        .set_field_settings("example.jp", "input#email", email_field())
        .await
        .unwrap();
    manager
        .remove_field_settings("example.jp", "input#email")
        .await
        .unwrap();

    assert_eq!(
        manager.field_settings("example.jp", "input#email").await.unwrap(),
        None
    );
    let site = manager.site_settings("example.jp").await.unwrap().unwrap();
    assert_eq!(site.fields, Some(BTreeMap::new()));
}

#[tokio::test]
async fn removing_field_of_unknown_site_writes_nothing() {
    let (manager, store) = manager();
    manager.remove_field_settings("example.jp", "input").await.unwrap();
    assert!(store.is_empty());
}

#[tokio::test]
async fn missing_field_is_absent() {
    let (manager, _) = manager();
    manager
        .set_site_settings("example.jp", SiteSettings::default())
        .await
        .unwrap();
    assert_eq!(manager.field_settings("example.jp", "input").await.unwrap(), None);
}

// ── Whole store ───────────────────────────────────────────────────────────

#[tokio::test]
async fn export_fills_in_defaults() {
    let (manager, _) = manager();
    assert_eq!(manager.export_data().await.unwrap(), StorageData::default());
}

#[tokio::test]
async fn export_import_round_trip() {
    let (source, _) = manager();
    source
        .set_global_settings(&GlobalSettings {
            enabled: true,
            auto_enable_japanese_sites: false,
        })
        .await
        .unwrap();
    source
        .set_field_settings("example.jp", "input#email", email_field())
        .await
        .unwrap();
    let exported = source.export_data().await.unwrap();

    let (target, _) = manager();
    target.import_data(&exported).await.unwrap();
    assert_eq!(target.export_data().await.unwrap(), exported);
    assert_eq!(
        target.field_settings("example.jp", "input#email").await.unwrap(),
        Some(email_field())
    );
}

#[tokio::test]
async fn export_ignores_foreign_keys() {
    let (manager, store) = manager();
    store.set("unrelated", json!([1, 2, 3])).await.unwrap();
    assert_eq!(manager.export_data().await.unwrap(), StorageData::default());
}

#[tokio::test]
async fn clear_removes_everything() {
    let (manager, store) = manager();
    manager
        .set_field_settings("example.jp", "input", email_field())
        .await
        .unwrap();
    manager.clear_all().await.unwrap();
    assert!(store.is_empty());
    assert_eq!(manager.global_settings().await.unwrap(), GlobalSettings::default());
}

// ── Failures ──────────────────────────────────────────────────────────────

struct FailingStore;

impl IKeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> SettingsResult<Option<Value>> {
        Err(SettingsError::backend("quota exceeded"))
    }
    async fn set(&self, _key: &str, _value: Value) -> SettingsResult<()> {
        Err(SettingsError::backend("quota exceeded"))
    }
    async fn remove(&self, _key: &str) -> SettingsResult<()> {
        Err(SettingsError::backend("quota exceeded"))
    }
    async fn clear(&self) -> SettingsResult<()> {
        Err(SettingsError::backend("quota exceeded"))
    }
    async fn entries(&self) -> SettingsResult<Vec<(String, Value)>> {
        Err(SettingsError::backend("quota exceeded"))
    }
}

#[tokio::test]
async fn backend_failures_propagate() {
    let manager = SettingsManager::new(FailingStore);
    let err = manager.global_settings().await.unwrap_err();
    assert!(matches!(err, SettingsError::Backend { .. }));
    assert!(err.to_string().contains("quota exceeded"));

    assert!(manager.set_field_settings("a", "input", email_field()).await.is_err());
    assert!(manager.export_data().await.is_err());
    assert!(manager.clear_all().await.is_err());
}

#[tokio::test]
async fn malformed_stored_value_is_a_serialization_error() {
    let (manager, store) = manager();
    store.set("global", json!("not an object")).await.unwrap();
    match manager.global_settings().await {
        Err(SettingsError::Serialization { key, .. }) => assert_eq!(key, "global"),
        other => panic!("expected serialization error, got {other:?}"),
    }
}

#[tokio::test]
async fn partial_stored_values_fill_defaults() {
    let (manager, store) = manager();
    store.set("global", json!({"enabled": false})).await.unwrap();
    store
        .set("sites", json!({"example.jp": {"fields": {"input": {"type": "tel"}}}}))
        .await
        .unwrap();

    let global = manager.global_settings().await.unwrap();
    assert!(!global.enabled);
    assert!(global.auto_enable_japanese_sites);

    let site = manager.site_settings("example.jp").await.unwrap().unwrap();
    assert!(site.enabled);
    assert_eq!(site.default_ime_mode, ImeMode::Auto);
    assert_eq!(
        site.field("input"),
        Some(&FieldSettings {
            input_type: Some(InputType::Tel),
            inputmode: None,
        })
    );
}

use imeopt_core::config::*;
use imeopt_core::errors::ConfigError;
use imeopt_core::models::ImeMode;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = ImeConfig::from_toml("").unwrap();

    assert!(config.defaults.global.enabled);
    assert!(config.defaults.global.auto_enable_japanese_sites);
    assert_eq!(config.defaults.site_ime_mode, ImeMode::Auto);

    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[defaults.global]
auto_enable_japanese_sites = false

[observability]
log_level = "debug"
"#;
    let config = ImeConfig::from_toml(toml).unwrap();
    assert!(!config.defaults.global.auto_enable_japanese_sites);
    // Non-overridden fields keep defaults
    assert!(config.defaults.global.enabled);
    assert_eq!(config.observability.log_level, "debug");
    assert!(!config.observability.json);
}

#[test]
fn config_rejects_unknown_log_level() {
    let err = ImeConfig::from_toml("[observability]\nlog_level = \"loud\"").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "observability.log_level");
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn config_reports_parse_errors() {
    let err = ImeConfig::from_toml("[observability\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = ImeConfig::default();
    config.defaults.site_ime_mode = ImeMode::On;
    config.observability.json = true;
    let text = config.to_toml().unwrap();
    let parsed = ImeConfig::from_toml(&text).unwrap();
    assert_eq!(parsed.defaults.site_ime_mode, ImeMode::On);
    assert!(parsed.observability.json);
}

#[test]
fn missing_config_file_is_reported() {
    let path = std::path::Path::new("/nonexistent/imeopt/config.toml");
    let err = ImeConfig::load(Some(path)).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn defaults_config_builds_site_entries() {
    let defaults = DefaultsConfig {
        site_ime_mode: ImeMode::Off,
        ..DefaultsConfig::default()
    };
    let site = defaults.site();
    assert!(site.enabled);
    assert_eq!(site.default_ime_mode, ImeMode::Off);
    assert!(site.fields.is_none());
}

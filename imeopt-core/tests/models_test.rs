use imeopt_core::models::*;

#[test]
fn input_type_parses_case_insensitively() {
    assert_eq!(InputType::parse_str("EMAIL"), Some(InputType::Email));
    assert_eq!(InputType::parse_str(" tel "), Some(InputType::Tel));
    assert_eq!(InputType::parse_str("checkbox"), None);
    for t in InputType::ALL {
        assert_eq!(InputType::parse_str(t.as_str()), Some(t));
    }
}

#[test]
fn input_mode_parses_known_tags_only() {
    assert_eq!(InputMode::parse_str("numeric"), Some(InputMode::Numeric));
    assert_eq!(InputMode::parse_str("none"), None);
}

#[test]
fn empty_strings_are_treated_as_absent() {
    let descriptor = FieldDescriptor::new()
        .with_name("")
        .with_placeholder("")
        .with_declared_type("");
    assert!(descriptor.is_empty());
    assert_eq!(descriptor, FieldDescriptor::default());
}

#[test]
fn search_text_follows_weight_order_and_lowercases() {
    let descriptor = FieldDescriptor::new()
        .with_class_name("Form-Control")
        .with_id("UserMail")
        .with_placeholder("Your Address")
        .with_name("contact")
        .with_label("Label")
        .with_aria_label("Aria");
    assert_eq!(
        descriptor.search_text(),
        "aria label contact your address usermail form-control"
    );
}

#[test]
fn search_text_excludes_declared_type() {
    let descriptor = FieldDescriptor::new().with_declared_type("email");
    assert_eq!(descriptor.search_text(), "");
    assert!(!descriptor.is_empty());
}

#[test]
fn unknown_prediction_satisfies_sentinel_invariant() {
    let unknown = PredictionResult::unknown();
    assert!(unknown.is_unknown());
    assert_eq!(unknown.confidence, 0.0);
    assert_eq!(unknown.glyph, Glyph::Unknown);
    assert_eq!(unknown.glyph.symbol(), "❓");
    assert_eq!(PredictionResult::default(), unknown);
}

#[test]
fn prediction_serializes_with_wire_tags() {
    let result = PredictionResult::new(
        InputAttributes::new(Some(InputType::Text), Some(InputMode::Numeric)),
        Glyph::CreditCard,
        0.85,
    );
    let json = serde_json::to_value(result).unwrap();
    assert_eq!(json["type"], "text");
    assert_eq!(json["inputmode"], "numeric");
    assert_eq!(json["glyph"], "credit-card");
}

#[test]
fn password_prediction_omits_inputmode_on_the_wire() {
    let result = PredictionResult::new(
        InputAttributes::new(Some(InputType::Password), None),
        Glyph::Password,
        1.0,
    );
    let json = serde_json::to_value(result).unwrap();
    assert!(json.get("inputmode").is_none());
}

#[test]
fn verdict_none_has_zero_confidence() {
    let verdict = LanguageVerdict::none();
    assert!(!verdict.is_japanese);
    assert_eq!(verdict.confidence, 0.0);
    assert_eq!(verdict.method, DetectionMethod::None);
}

#[test]
fn verdict_serializes_method_as_kebab_case() {
    let json = serde_json::to_value(LanguageVerdict::declared(true)).unwrap();
    assert_eq!(json["isJapanese"], true);
    assert_eq!(json["method"], "declared-tag");
    let json = serde_json::to_value(LanguageVerdict::content(false, 0.1)).unwrap();
    assert_eq!(json["method"], "content-analysis");
}

#[test]
fn descriptor_deserializes_from_camel_case() {
    let descriptor: FieldDescriptor = serde_json::from_str(
        r#"{"ariaLabel":"電話番号","className":"input","type":"tel"}"#,
    )
    .unwrap();
    assert_eq!(descriptor.aria_label.as_deref(), Some("電話番号"));
    assert_eq!(descriptor.class_name.as_deref(), Some("input"));
    assert_eq!(descriptor.declared_type.as_deref(), Some("tel"));
}

#[test]
fn site_settings_fill_defaults_when_fields_missing() {
    let site: SiteSettings = serde_json::from_str("{}").unwrap();
    assert!(site.enabled);
    assert_eq!(site.default_ime_mode, ImeMode::Auto);
    assert!(site.fields.is_none());
}

#[test]
fn site_settings_round_trip_field_overrides() {
    let json = r#"{
        "enabled": false,
        "defaultImeMode": "off",
        "fields": { "input#zip": { "type": "text", "inputmode": "numeric" } }
    }"#;
    let site: SiteSettings = serde_json::from_str(json).unwrap();
    assert!(!site.enabled);
    assert_eq!(site.default_ime_mode, ImeMode::Off);
    let field = site.field("input#zip").unwrap();
    assert_eq!(field.input_type, Some(InputType::Text));
    assert_eq!(field.inputmode, Some(InputMode::Numeric));
    assert!(site.field("input#other").is_none());
}

#[test]
fn global_settings_default_to_enabled_with_auto_detection() {
    let global = GlobalSettings::default();
    assert!(global.enabled);
    assert!(global.auto_enable_japanese_sites);
    let json = serde_json::to_value(global).unwrap();
    assert_eq!(json["autoEnableJapaneseSites"], true);
}

#[test]
fn global_settings_read_only_camel_case_keys() {
    let global: GlobalSettings =
        serde_json::from_str(r#"{"enabled":false,"auto_enable_japanese_sites":false}"#).unwrap();
    assert!(!global.enabled);
    assert!(global.auto_enable_japanese_sites);

    let global: GlobalSettings =
        serde_json::from_str(r#"{"autoEnableJapaneseSites":false}"#).unwrap();
    assert!(global.enabled);
    assert!(!global.auto_enable_japanese_sites);
}

#[test]
fn ime_mode_parse_and_display_agree() {
    for mode in [ImeMode::On, ImeMode::Off, ImeMode::Auto] {
        assert_eq!(ImeMode::parse_str(&mode.to_string()), Some(mode));
    }
    assert_eq!(ImeMode::parse_str("sometimes"), None);
}

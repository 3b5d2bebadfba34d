use imeopt_core::models::InputType;
use imeopt_core::traits::{IFieldClassifier, ILiveField};
use imeopt_predictor::{extract_descriptor, FieldTypePredictor};

// ── Mock field ────────────────────────────────────────────────────────────

#[derive(Default)]
struct MockField {
    name: Option<&'static str>,
    placeholder: Option<&'static str>,
    aria_label: Option<&'static str>,
    id: Option<&'static str>,
    class_name: Option<&'static str>,
    declared_type: Option<&'static str>,
    bound_label: Option<&'static str>,
    wrapping_label: Option<&'static str>,
}

fn owned(value: Option<&'static str>) -> Option<String> {
    value.map(str::to_string)
}

impl ILiveField for MockField {
    fn name(&self) -> Option<String> {
        owned(self.name)
    }
    fn placeholder(&self) -> Option<String> {
        owned(self.placeholder)
    }
    fn aria_label(&self) -> Option<String> {
        owned(self.aria_label)
    }
    fn id(&self) -> Option<String> {
        owned(self.id)
    }
    fn class_name(&self) -> Option<String> {
        owned(self.class_name)
    }
    fn declared_type(&self) -> Option<String> {
        owned(self.declared_type)
    }
    fn bound_label_text(&self) -> Option<String> {
        owned(self.bound_label)
    }
    fn wrapping_label_text(&self) -> Option<String> {
        owned(self.wrapping_label)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[test]
fn bound_label_wins_over_wrapping_label() {
    let field = MockField {
        id: Some("field1"),
        bound_label: Some("メールアドレス"),
        wrapping_label: Some("住所"),
        ..Default::default()
    };
    let descriptor = extract_descriptor(&field);
    assert_eq!(descriptor.label.as_deref(), Some("メールアドレス"));
}

#[test]
fn bound_label_requires_an_id() {
    let field = MockField {
        bound_label: Some("メールアドレス"),
        wrapping_label: Some("  住所  "),
        ..Default::default()
    };
    let descriptor = extract_descriptor(&field);
    assert_eq!(descriptor.label.as_deref(), Some("住所"));
}

#[test]
fn empty_bound_label_falls_back_to_wrapping_label() {
    let field = MockField {
        id: Some("f"),
        bound_label: Some(""),
        wrapping_label: Some(" 電話番号 "),
        ..Default::default()
    };
    assert_eq!(extract_descriptor(&field).label.as_deref(), Some("電話番号"));
}

#[test]
fn whitespace_only_wrapping_label_is_absent() {
    let field = MockField {
        wrapping_label: Some("   "),
        ..Default::default()
    };
    assert_eq!(extract_descriptor(&field).label, None);
}

#[test]
fn empty_attributes_are_dropped() {
    let field = MockField {
        name: Some(""),
        id: Some(""),
        class_name: Some(""),
        declared_type: Some(""),
        ..Default::default()
    };
    assert!(extract_descriptor(&field).is_empty());
}

#[test]
fn existing_declared_type_is_used() {
    let field = MockField {
        declared_type: Some("email"),
        name: Some("contact"),
        ..Default::default()
    };
    let result = FieldTypePredictor::new().classify_element(&field);
    assert_eq!(result.input_type, Some(InputType::Email));
    assert_eq!(result.confidence, 0.95);
}

#[test]
fn label_text_drives_classification() {
    let field = MockField {
        id: Some("field1"),
        declared_type: Some("text"),
        bound_label: Some("メールアドレス"),
        ..Default::default()
    };
    let result = FieldTypePredictor::new().classify_element(&field);
    assert_eq!(result.input_type, Some(InputType::Email));
}

#[test]
fn aria_label_outranks_other_attributes() {
    let field = MockField {
        aria_label: Some("電話番号"),
        name: Some("contact"),
        placeholder: Some("Enter contact"),
        ..Default::default()
    };
    let result = FieldTypePredictor::new().classify_element(&field);
    assert_eq!(result.input_type, Some(InputType::Tel));
}

use imeopt_core::models::{FieldDescriptor, Glyph, InputType};
use imeopt_core::traits::IFieldClassifier;
use imeopt_predictor::FieldTypePredictor;
use proptest::prelude::*;

proptest! {
    // Classification is total and the unknown sentinel is self-consistent.
    #[test]
    fn unknown_results_have_zero_confidence(
        name in ".{0,24}",
        placeholder in ".{0,24}",
        class_name in ".{0,24}",
    ) {
        let descriptor = FieldDescriptor::new()
            .with_name(name)
            .with_placeholder(placeholder)
            .with_class_name(class_name);
        let result = FieldTypePredictor::new().classify(&descriptor);
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        if result.input_type.is_none() && result.inputmode.is_none() {
            prop_assert_eq!(result.confidence, 0.0);
            prop_assert_eq!(result.glyph, Glyph::Unknown);
        } else {
            prop_assert!(result.confidence > 0.0);
        }
    }

    #[test]
    fn password_keyword_always_yields_full_confidence(
        prefix in "[xz_]{0,8}",
        suffix in "[xz_]{0,8}",
    ) {
        let descriptor = FieldDescriptor::new().with_name(format!("{prefix}password{suffix}"));
        let result = FieldTypePredictor::new().classify(&descriptor);
        prop_assert_eq!(result.input_type, Some(InputType::Password));
        prop_assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn declared_tel_ignores_descriptor_text(text in ".{0,32}") {
        let descriptor = FieldDescriptor::new()
            .with_declared_type("tel")
            .with_placeholder(text);
        let result = FieldTypePredictor::new().classify(&descriptor);
        prop_assert_eq!(result.input_type, Some(InputType::Tel));
        prop_assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn classification_is_deterministic(name in ".{0,32}") {
        let predictor = FieldTypePredictor::new();
        let descriptor = FieldDescriptor::new().with_name(name);
        prop_assert_eq!(predictor.classify(&descriptor), predictor.classify(&descriptor));
    }
}

pub mod classifier;
pub mod document_source;
pub mod key_value_store;
pub mod language_detector;
pub mod live_field;

pub use classifier::IFieldClassifier;
pub use document_source::IDocumentSource;
pub use key_value_store::IKeyValueStore;
pub use language_detector::ILanguageDetector;
pub use live_field::ILiveField;

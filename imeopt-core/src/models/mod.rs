pub mod field_descriptor;
pub mod glyph;
pub mod input_attributes;
pub mod language_verdict;
pub mod prediction_result;
pub mod settings;

pub use field_descriptor::FieldDescriptor;
pub use glyph::Glyph;
pub use input_attributes::{InputAttributes, InputMode, InputType};
pub use language_verdict::{DetectionMethod, LanguageVerdict};
pub use prediction_result::PredictionResult;
pub use settings::{FieldSettings, GlobalSettings, ImeMode, SiteSettings, StorageData};

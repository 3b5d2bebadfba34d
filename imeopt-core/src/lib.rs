//! # imeopt-core
//!
//! Foundation crate for the IME optimizer.
//! Defines the shared models, traits, errors, config, and constants used by the
//! field-type predictor, the language detector, and the runtime glue around them.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ImeConfig;
pub use errors::{ImeError, ImeResult};
pub use models::{
    DetectionMethod, FieldDescriptor, Glyph, InputAttributes, InputMode, InputType,
    LanguageVerdict, PredictionResult,
};

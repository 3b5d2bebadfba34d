//! Error handling for the IME optimizer.
//! One error enum per subsystem, `thiserror` only.
//!
//! The predictor and the language detector are total and never fail; errors
//! only arise in the settings collaborator and in configuration loading.

pub mod config_error;
pub mod ime_error;
pub mod settings_error;

pub use config_error::ConfigError;
pub use ime_error::{ImeError, ImeResult};
pub use settings_error::{SettingsError, SettingsResult};

use super::{ConfigError, SettingsError};

/// Top-level error for operations that cross subsystem boundaries.
#[derive(Debug, thiserror::Error)]
pub enum ImeError {
    #[error("settings error: {0}")]
    SettingsError(#[from] SettingsError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },
}

pub type ImeResult<T> = Result<T, ImeError>;

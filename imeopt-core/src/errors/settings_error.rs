/// Errors surfaced by the settings store collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The backing store rejected or failed the operation.
    #[error("storage operation failed: {reason}")]
    Backend { reason: String },

    /// A stored value could not be converted to or from its typed form.
    #[error("malformed value under key '{key}': {reason}")]
    Serialization { key: String, reason: String },
}

impl SettingsError {
    pub fn backend(reason: impl Into<String>) -> Self {
        Self::Backend {
            reason: reason.into(),
        }
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;

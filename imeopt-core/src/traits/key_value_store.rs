use serde_json::Value;

use crate::errors::SettingsResult;

/// Asynchronous dictionary the settings layer persists through.
///
/// The backing implementation (browser storage, file, remote) is supplied by
/// the embedder.
#[allow(async_fn_in_trait)]
pub trait IKeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> SettingsResult<Option<Value>>;

    async fn set(&self, key: &str, value: Value) -> SettingsResult<()>;

    async fn remove(&self, key: &str) -> SettingsResult<()>;

    /// Remove every key.
    async fn clear(&self) -> SettingsResult<()>;

    /// Snapshot of all stored entries.
    async fn entries(&self) -> SettingsResult<Vec<(String, Value)>>;
}

//! In-process key-value store backed by `DashMap`.

use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;

use imeopt_core::errors::SettingsResult;
use imeopt_core::traits::IKeyValueStore;

/// Thread-safe in-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw snapshot of one entry.
    pub fn peek(&self, key: &str) -> Option<Value> {
        self.entries.get(key).map(|r| r.clone())
    }
}

impl IKeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> SettingsResult<Option<Value>> {
        Ok(self.peek(key))
    }

    async fn set(&self, key: &str, value: Value) -> SettingsResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> SettingsResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn clear(&self) -> SettingsResult<()> {
        self.entries.clear();
        Ok(())
    }

    /// Entries sorted by key.
    async fn entries(&self) -> SettingsResult<Vec<(String, Value)>> {
        let mut entries: Vec<(String, Value)> = self
            .entries
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }
}

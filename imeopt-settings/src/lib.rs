//! # imeopt-settings
//!
//! Maps user preferences onto the injected [`IKeyValueStore`]:
//! one `global` entry and one `sites` map of per-domain settings, each site
//! optionally carrying per-field overrides keyed by selector.
//!
//! [`IKeyValueStore`]: imeopt_core::traits::IKeyValueStore

pub mod manager;
pub mod memory_store;

pub use manager::SettingsManager;
pub use memory_store::MemoryStore;

//! Configuration for the IME optimizer.
//! TOML-based, resolution order: env > file > compiled defaults.

pub mod defaults;
pub mod defaults_config;
pub mod ime_config;
pub mod observability_config;

pub use defaults_config::DefaultsConfig;
pub use ime_config::ImeConfig;
pub use observability_config::ObservabilityConfig;

// Single source of truth for all default values.

// --- Global settings ---
pub const DEFAULT_ENABLED: bool = true;
pub const DEFAULT_AUTO_ENABLE_JAPANESE_SITES: bool = true;

// --- Site settings ---
pub const DEFAULT_SITE_ENABLED: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const LOG_ENV_VAR: &str = "IMEOPT_LOG";
pub const LOG_LEVEL_ENV_VAR: &str = "IMEOPT_LOG_LEVEL";
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

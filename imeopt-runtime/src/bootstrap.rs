use std::path::Path;
use std::sync::Arc;

use imeopt_core::tracing_setup::init_tracing;
use imeopt_core::traits::IKeyValueStore;
use imeopt_core::{ImeConfig, ImeResult};
use imeopt_settings::SettingsManager;

/// Load configuration, install the tracing subscriber, and build the
/// settings manager over `store` with the configured defaults.
pub fn bootstrap<S: IKeyValueStore>(
    store: S,
    config_path: Option<&Path>,
) -> ImeResult<(Arc<SettingsManager<S>>, ImeConfig)> {
    let config = ImeConfig::load(config_path)?;
    if !init_tracing(&config.observability) {
        tracing::debug!("tracing subscriber already installed");
    }
    let settings = SettingsManager::with_defaults(store, config.defaults.clone());
    Ok((Arc::new(settings), config))
}

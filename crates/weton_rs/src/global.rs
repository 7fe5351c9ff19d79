//! Process-wide configuration, set at most once.

use std::sync::OnceLock;

use tracing::info;

use crate::config::EngineConfig;
use crate::error::WetonError;

static CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Install the global configuration. Fails if already initialized.
pub fn init(config: EngineConfig) -> Result<(), WetonError> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| WetonError::AlreadyInitialized)?;
    info!(?config, "weton configuration initialized");
    Ok(())
}

pub fn is_initialized() -> bool {
    CONFIG.get().is_some()
}

/// Active configuration; the default until [`init`] runs.
pub fn config() -> EngineConfig {
    CONFIG.get().copied().unwrap_or_default()
}

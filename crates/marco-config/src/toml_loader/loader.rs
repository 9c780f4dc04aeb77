//! Core TOML config loading: read from path or platform default.

use crate::schema::MarcoConfig;
use crate::validation;
use marco_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields fall back to serde defaults. Validation problems are
/// logged as a warning; the parsed config is still returned.
pub fn load_from_path(path: &Path) -> Result<MarcoConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: MarcoConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; keeping parsed values");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/marco/config.toml`
/// On Linux: `~/.config/marco/config.toml`
///
/// A missing file is not an error: a commented default config is written
/// and defaults are returned.
pub fn load_default() -> Result<MarcoConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(MarcoConfig::default());
    }
    load_from_path(&path)
}

//! Configuration schema types for Marco.
//!
//! All structs use `serde(default)` so partial configs work correctly.

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Assist service connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the assist service.
    pub base_url: String,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}

/// History panel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// How many past exchanges to request on each refresh.
    /// The service clamps this to 1-50.
    pub limit: u32,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { limit: 10 }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter directive, overridable with `--log-level`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "marco=info".into(),
        }
    }
}

/// Root configuration for Marco.
///
/// All options have sensible defaults. Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarcoConfig {
    pub service: ServiceConfig,
    pub history: HistoryConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_local_service() {
        let config = MarcoConfig::default();
        assert_eq!(config.service.base_url, "http://localhost:8000");
        assert_eq!(config.service.connect_timeout_secs, 10);
        assert_eq!(config.service.request_timeout_secs, 120);
    }

    #[test]
    fn default_history_limit_matches_service_default() {
        let config = MarcoConfig::default();
        assert_eq!(config.history.limit, 10);
    }

    #[test]
    fn partial_toml_fills_missing_sections() {
        let config: MarcoConfig = toml::from_str(
            r#"
[service]
base_url = "https://assist.example.com"
"#,
        )
        .unwrap();
        assert_eq!(config.service.base_url, "https://assist.example.com");
        // Defaults preserved
        assert_eq!(config.service.connect_timeout_secs, 10);
        assert_eq!(config.history.limit, 10);
        assert_eq!(config.logging.level, "marco=info");
    }
}

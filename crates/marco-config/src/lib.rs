//! Marco configuration system.
//!
//! Provides TOML-based configuration with validation, plus the durable
//! credential store. All config sections use sensible defaults so partial
//! configs work out of the box.

pub mod credential;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use credential::CredentialStore;
pub use schema::MarcoConfig;

use marco_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creating a commented
/// default if none exists. Validation problems are logged as warnings; the
/// parsed config is still returned.
pub fn load_config() -> Result<MarcoConfig, ConfigError> {
    toml_loader::load_default()
}

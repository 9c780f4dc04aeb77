//! Configuration validation.
//!
//! Collects all problems into a single `ConfigError` rather than stopping
//! at the first one.

use crate::schema::MarcoConfig;
use marco_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MarcoConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_service(&mut errors, config);
    validate_history(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_service(errors: &mut Vec<String>, config: &MarcoConfig) {
    let url = config.service.base_url.trim();
    if url.is_empty() {
        errors.push("service.base_url must not be empty".into());
    } else if !url.starts_with("http://") && !url.starts_with("https://") {
        errors.push(format!(
            "service.base_url must start with http:// or https:// (got '{url}')"
        ));
    }

    if config.service.connect_timeout_secs == 0 {
        errors.push("service.connect_timeout_secs must be at least 1".into());
    }
    if config.service.request_timeout_secs == 0 {
        errors.push("service.request_timeout_secs must be at least 1".into());
    }
}

fn validate_history(errors: &mut Vec<String>, config: &MarcoConfig) {
    // The service clamps limit to 1-50; warn early instead of surprising later.
    if !(1..=50).contains(&config.history.limit) {
        errors.push(format!(
            "history.limit must be 1-50 (got {})",
            config.history.limit
        ));
    }
}

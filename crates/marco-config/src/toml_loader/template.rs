//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Marco Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[service]
# Base URL of the travel-documentation assist service.
base_url = "http://localhost:8000"
# connect_timeout_secs = 10
# request_timeout_secs = 120

[history]
# Past exchanges requested per refresh. The service accepts 1-50.
# limit = 10

[logging]
# Default tracing filter; --log-level overrides this.
# level = "marco=info"
"##
    .to_string()
}

//! Assist client struct, request building, and response classification.

use reqwest::StatusCode;

use crate::GatewayError;

use super::config::GatewayConfig;

pub(crate) const API_PREFIX: &str = "/api/v1";

/// HTTP client for the assist service.
pub struct AssistClient {
    pub(crate) config: GatewayConfig,
    pub(crate) http: reqwest::Client,
}

impl AssistClient {
    pub fn new(config: GatewayConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { config, http }
    }

    /// Full URL for an API path like `/query`.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{API_PREFIX}{path}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Build the `/query` request body. The credential, when present, rides
    /// along as the `api_key` field and is never logged.
    pub(crate) fn build_query_body(
        question: &str,
        credential: Option<&str>,
    ) -> serde_json::Value {
        let mut body = serde_json::json!({ "question": question });
        if let Some(key) = credential {
            body["api_key"] = serde_json::json!(key);
        }
        body
    }

    /// Map a non-2xx response into the closed error taxonomy.
    ///
    /// 401, or any payload whose message mentions the API key, is an auth
    /// failure; other 4xx are validation rejections; everything else is a
    /// service fault.
    pub(crate) fn classify_failure(status: StatusCode, body: &str) -> GatewayError {
        let message =
            extract_error_message(body).unwrap_or_else(|| format!("HTTP {status}"));

        if status == StatusCode::UNAUTHORIZED || message.contains("API key") {
            GatewayError::Auth(message)
        } else if status.is_client_error() {
            GatewayError::Validation(message)
        } else {
            GatewayError::Server(message)
        }
    }
}

/// Pull a human-readable message out of a service error payload.
///
/// The service emits either a bare `{"error": ...}` object or the
/// framework wrapper `{"detail": ...}` where detail is a string or an
/// `{error, details, code}` object.
fn extract_error_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;

    if let Some(msg) = json["error"].as_str() {
        return Some(msg.to_string());
    }
    match &json["detail"] {
        serde_json::Value::String(s) => Some(s.clone()),
        detail @ serde_json::Value::Object(_) => detail["error"]
            .as_str()
            .or_else(|| detail["details"].as_str())
            .map(String::from),
        _ => None,
    }
}

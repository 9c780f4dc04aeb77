//! Assist service engine for Marco.
//!
//! Provides the typed HTTP client for the travel-documentation assist
//! service and the conversation session that orchestrates it:
//! - Closed failure classification at the client boundary
//! - Single-flight submission state machine
//! - Server-authoritative history snapshot cache
//! - Credential lifecycle side effects

pub mod client;
pub mod session;

mod timestamp;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use client::{AssistClient, GatewayConfig};
pub use session::{Exchange, HistoryCache, Session, SubmitError};

/// Typed access to the remote assist service.
///
/// Every operation is a single request/response round trip with no retries
/// and no hidden state; failures are mapped into `GatewayError` here so
/// callers never inspect transport-layer shapes.
#[async_trait]
pub trait AssistGateway: Send + Sync {
    async fn check_health(&self) -> Result<HealthReport, GatewayError>;

    async fn submit_question(
        &self,
        question: &str,
        credential: Option<&str>,
    ) -> Result<Answer, GatewayError>;

    async fn fetch_history(&self, limit: u32) -> Result<Vec<HistoryEntry>, GatewayError>;

    async fn fetch_suggestions(&self) -> Result<Vec<String>, GatewayError>;

    async fn validate_key(&self, credential: &str) -> Result<KeyValidation, GatewayError>;
}

/// A structured answer from the assist service.
///
/// Optional arrays are absent on the wire when the service has nothing to
/// report; they decode to empty vectors, never to errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub original_question: String,
    pub answer: String,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default, rename = "travel_advisories")]
    pub advisories: Vec<Advisory>,
    #[serde(default)]
    pub additional_info: Vec<String>,
    pub formatted_response: String,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// A travel document the destination requires or recommends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub description: String,
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

/// A travel advisory for the destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advisory {
    pub level: String,
    pub description: String,
    #[serde(with = "timestamp")]
    pub last_updated: DateTime<Utc>,
}

/// A past exchange as recorded by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub question: String,
    pub answer: String,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Result of the service health probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub version: String,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
    pub llm_available: bool,
}

/// Service-side verdict on a candidate API key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyValidation {
    pub is_valid: bool,
    pub message: String,
}

/// Last known state of the assist service, independent of whether a
/// credential is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Checking,
    Healthy,
    Unhealthy,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Checking => "checking",
            Self::Healthy => "healthy",
            Self::Unhealthy => "unhealthy",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Transport-level failure: unreachable service, DNS, timeout.
    #[error("cannot reach assist service: {0}")]
    Connectivity(String),
    /// HTTP 401, or an error payload signalling a missing/invalid API key.
    #[error("{0}")]
    Auth(String),
    /// Any other 4xx rejection.
    #[error("request rejected: {0}")]
    Validation(String),
    /// 5xx from the service.
    #[error("assist service error: {0}")]
    Server(String),
    /// 2xx whose body does not match the declared schema.
    #[error("malformed service response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Whether this failure should open the credential entry surface.
    pub fn requires_credential(&self) -> bool {
        match self {
            Self::Auth(_) => true,
            other => other.to_string().contains("API key"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_decodes_absent_arrays_as_empty() {
        let json = r###"{
            "original_question": "Visa for France",
            "answer": "You need a passport.",
            "formatted_response": "## Requirements\nYou need a passport.",
            "timestamp": "2025-03-01T09:30:00Z"
        }"###;
        let answer: Answer = serde_json::from_str(json).unwrap();
        assert!(answer.documents.is_empty());
        assert!(answer.advisories.is_empty());
        assert!(answer.additional_info.is_empty());
    }

    #[test]
    fn answer_decodes_document_list() {
        let json = r#"{
            "original_question": "Visa for France",
            "answer": "See below.",
            "documents": [{"title": "Passport", "description": "Valid 6 months", "required": true}],
            "travel_advisories": [],
            "additional_info": [],
            "formatted_response": "See below.",
            "timestamp": "2025-03-01T09:30:00Z"
        }"#;
        let answer: Answer = serde_json::from_str(json).unwrap();
        assert_eq!(answer.documents.len(), 1);
        assert_eq!(answer.documents[0].title, "Passport");
        assert!(answer.documents[0].required);
        assert!(answer.advisories.is_empty());
        assert!(answer.additional_info.is_empty());
    }

    #[test]
    fn document_required_defaults_to_true() {
        let doc: Document =
            serde_json::from_str(r#"{"title": "Visa", "description": "Tourist visa"}"#).unwrap();
        assert!(doc.required);
    }

    #[test]
    fn history_entry_decodes_offsetless_timestamp() {
        // The service emits naive ISO-8601 timestamps without an offset
        let json = r#"{
            "id": 7,
            "question": "Visa for Japan",
            "answer": "Not required for stays under 90 days...",
            "timestamp": "2025-03-01T09:30:00.123456"
        }"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.question, "Visa for Japan");
    }

    #[test]
    fn auth_error_requires_credential() {
        let err = GatewayError::Auth("Invalid API key".into());
        assert!(err.requires_credential());
    }

    #[test]
    fn credential_message_in_other_kinds_requires_credential() {
        let err = GatewayError::Server("Please add your API key to continue".into());
        assert!(err.requires_credential());

        let err = GatewayError::Server("upstream model unavailable".into());
        assert!(!err.requires_credential());
    }

    #[test]
    fn gateway_error_display() {
        let err = GatewayError::Connectivity("connection refused".into());
        assert_eq!(
            err.to_string(),
            "cannot reach assist service: connection refused"
        );

        let err = GatewayError::Validation("question too long".into());
        assert_eq!(err.to_string(), "request rejected: question too long");

        let err = GatewayError::Server("internal error".into());
        assert_eq!(err.to_string(), "assist service error: internal error");
    }

    #[test]
    fn session_status_display() {
        assert_eq!(SessionStatus::Checking.to_string(), "checking");
        assert_eq!(SessionStatus::Healthy.to_string(), "healthy");
        assert_eq!(SessionStatus::Unhealthy.to_string(), "unhealthy");
    }
}

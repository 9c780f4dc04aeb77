//! AssistGateway trait implementation for AssistClient.

use async_trait::async_trait;
use tracing::{debug, warn};

use marco_common::new_correlation_id;

use crate::{
    Answer, AssistGateway, GatewayError, HealthReport, HistoryEntry, KeyValidation,
};

use super::client::AssistClient;

#[async_trait]
impl AssistGateway for AssistClient {
    async fn check_health(&self) -> Result<HealthReport, GatewayError> {
        let url = self.endpoint("/health");
        debug!(%url, "health probe");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Connectivity(e.to_string()))?;

        // Any non-2xx means the service is not usable, not a partial failure
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Connectivity(format!(
                "health probe returned HTTP {status}"
            )));
        }

        response
            .json::<HealthReport>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn submit_question(
        &self,
        question: &str,
        credential: Option<&str>,
    ) -> Result<Answer, GatewayError> {
        let rid = new_correlation_id();
        let body = AssistClient::build_query_body(question, credential);

        debug!(request = %rid, with_key = credential.is_some(), "submitting question");

        let response = self
            .http
            .post(self.endpoint("/query"))
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Connectivity(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = AssistClient::classify_failure(status, &text);
            warn!(request = %rid, %status, "question rejected: {err}");
            return Err(err);
        }

        let answer = response
            .json::<Answer>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        debug!(
            request = %rid,
            documents = answer.documents.len(),
            advisories = answer.advisories.len(),
            "answer received"
        );
        Ok(answer)
    }

    async fn fetch_history(&self, limit: u32) -> Result<Vec<HistoryEntry>, GatewayError> {
        let response = self
            .http
            .get(self.endpoint("/history"))
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(|e| GatewayError::Connectivity(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AssistClient::classify_failure(status, &text));
        }

        // Order is server-defined (most recent first); keep it untouched
        response
            .json::<Vec<HistoryEntry>>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn fetch_suggestions(&self) -> Result<Vec<String>, GatewayError> {
        let response = self
            .http
            .get(self.endpoint("/example-questions"))
            .send()
            .await
            .map_err(|e| GatewayError::Connectivity(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AssistClient::classify_failure(status, &text));
        }

        response
            .json::<Vec<String>>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn validate_key(&self, credential: &str) -> Result<KeyValidation, GatewayError> {
        let response = self
            .http
            .post(self.endpoint("/validate-api-key"))
            .json(&serde_json::json!({ "api_key": credential }))
            .send()
            .await
            .map_err(|e| GatewayError::Connectivity(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AssistClient::classify_failure(status, &text));
        }

        response
            .json::<KeyValidation>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

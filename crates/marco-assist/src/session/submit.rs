//! Async session operations: the submission state machine, health probe,
//! suggestion fetch and credential verification.

use tracing::debug;

use marco_common::ExchangeId;

use crate::{AssistGateway, GatewayError, HealthReport, KeyValidation, SessionStatus};

use super::manager::{Session, CREDENTIAL_REQUIRED_MSG, FALLBACK_SUGGESTIONS, UNREACHABLE_MSG};
use super::types::{Exchange, FlightGuard, SubmitError};

impl Session {
    /// Submit a question to the assist service.
    ///
    /// Admission: empty questions and overlapping submissions are rejected
    /// without touching any state. If the service is known unhealthy and no
    /// credential is saved, the submission is refused locally and the
    /// credential prompt is raised instead of making a network call.
    ///
    /// An accepted question is appended to the conversation immediately and
    /// the previous global error is dismissed. On success the answer is
    /// attached in place and the history cache chases the server's view; on
    /// failure the exchange is removed again and the failure message becomes
    /// the session error.
    pub async fn submit(
        &mut self,
        gateway: &dyn AssistGateway,
        question: &str,
    ) -> Result<ExchangeId, SubmitError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(SubmitError::EmptyQuestion);
        }
        let _guard = FlightGuard::acquire(&self.in_flight)?;

        // Local short-circuit only; with a credential present (or health
        // still unknown) the server stays authoritative.
        if !self.credential.is_present() && self.status == SessionStatus::Unhealthy {
            self.error = Some(CREDENTIAL_REQUIRED_MSG.to_string());
            self.credential_prompt = true;
            return Err(SubmitError::CredentialRequired);
        }

        let id = ExchangeId::new(self.next_id);
        self.next_id += 1;
        self.exchanges.push(Exchange::new(id, question));
        self.error = None;
        self.credential_prompt = false;

        let credential = self.credential.get().map(str::to_owned);
        match gateway.submit_question(question, credential.as_deref()).await {
            Ok(answer) => {
                if let Some(exchange) = self.exchanges.iter_mut().find(|e| e.id == id) {
                    exchange.response = Some(answer);
                }
                // Refresh failure is silent and cannot undo the fulfilled
                // exchange.
                self.history.refresh(gateway, self.history_limit).await;
                Ok(id)
            }
            Err(err) => {
                self.exchanges.retain(|e| e.id != id);
                self.credential_prompt = err.requires_credential();
                self.error = Some(err.to_string());
                Err(SubmitError::Gateway(err))
            }
        }
    }

    /// Resubmit a past question from the history cache.
    ///
    /// A history selection is always a fresh submission, never a replay of
    /// the cached answer.
    pub async fn resubmit(
        &mut self,
        gateway: &dyn AssistGateway,
        index: usize,
    ) -> Result<ExchangeId, SubmitError> {
        let Some(question) = self.history_question(index).map(str::to_owned) else {
            return Err(SubmitError::UnknownHistoryEntry);
        };
        self.submit(gateway, &question).await
    }

    /// Probe service health and record the result.
    ///
    /// A reachable service also triggers an initial silent history refresh
    /// so the history panel is populated on startup.
    pub async fn check_health(
        &mut self,
        gateway: &dyn AssistGateway,
    ) -> Result<HealthReport, GatewayError> {
        match gateway.check_health().await {
            Ok(report) => {
                self.status = SessionStatus::Healthy;
                self.history.refresh(gateway, self.history_limit).await;
                Ok(report)
            }
            Err(err) => {
                debug!("health probe failed: {err}");
                self.status = SessionStatus::Unhealthy;
                self.error = Some(UNREACHABLE_MSG.to_string());
                Err(err)
            }
        }
    }

    /// Example questions for seeding the prompt.
    ///
    /// Falls back to a fixed built-in list when the service cannot supply
    /// any; the fetch failure itself is never surfaced.
    pub async fn suggestions(&self, gateway: &dyn AssistGateway) -> Vec<String> {
        match gateway.fetch_suggestions().await {
            Ok(questions) => questions,
            Err(err) => {
                debug!("suggestion fetch failed, using built-in list: {err}");
                FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
            }
        }
    }

    /// Ask the service whether a credential is usable against the upstream
    /// provider. Read-only; saves nothing and touches no conversation state.
    pub async fn verify_credential(
        &self,
        gateway: &dyn AssistGateway,
        credential: &str,
    ) -> Result<KeyValidation, GatewayError> {
        gateway.validate_key(credential).await
    }
}

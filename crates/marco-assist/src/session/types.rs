//! Session types and concurrency guards.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};

use marco_common::ExchangeId;

use crate::{Answer, GatewayError};

/// One question/answer exchange in the conversation.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub id: ExchangeId,
    pub question: String,
    /// Attached once the service answers; `None` while the submission is
    /// in flight. Failed submissions never leave an exchange behind.
    pub response: Option<Answer>,
    pub created_at: DateTime<Utc>,
}

impl Exchange {
    pub(super) fn new(id: ExchangeId, question: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            response: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_fulfilled(&self) -> bool {
        self.response.is_some()
    }
}

/// Why a submission was not carried out.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Question was empty or whitespace-only. Nothing changed.
    #[error("question is empty")]
    EmptyQuestion,
    /// Another submission is still in flight. Nothing changed.
    #[error("a submission is already in flight")]
    Busy,
    /// Resubmission index pointed outside the cached history. Nothing changed.
    #[error("no such history entry")]
    UnknownHistoryEntry,
    /// Local gate: no credential saved and the service is known unhealthy.
    #[error("an API key is required before asking questions")]
    CredentialRequired,
    /// The gateway call failed; the exchange was discarded.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Guard that clears the in-flight flag on drop, so the single submission
/// slot is always released even if the future is dropped mid-await.
pub(super) struct FlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> FlightGuard<'a> {
    /// Claim the submission slot. Fails if a submission is already in flight.
    pub(super) fn acquire(flag: &'a AtomicBool) -> Result<Self, SubmitError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(SubmitError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

//! Session struct: owned conversation state and its read/write surface.

use std::sync::atomic::AtomicBool;

use marco_common::ConfigError;
use marco_config::CredentialStore;

use crate::{HistoryEntry, SessionStatus};

use super::history::HistoryCache;
use super::types::Exchange;

/// Error message shown when the health probe cannot reach the service.
pub(super) const UNREACHABLE_MSG: &str =
    "Unable to connect to the server. Please make sure the backend is running.";

/// Error message for the local credential gate.
pub(super) const CREDENTIAL_REQUIRED_MSG: &str =
    "Please add your API key to use the assistant.";

/// Built-in example questions used when the service cannot supply any.
pub(super) const FALLBACK_SUGGESTIONS: [&str; 3] = [
    "What documents do I need to travel from Kenya to Ireland?",
    "Visa requirements for Indian citizens traveling to Japan",
    "Passport validity requirements for Schengen countries",
];

/// A conversation session against the assist service.
///
/// The session is the sole mutator of the conversation, the history cache
/// and the credential store; the rendering layer reads through the
/// accessors here and never writes.
pub struct Session {
    /// Ordered conversation exchanges.
    pub(super) exchanges: Vec<Exchange>,
    /// Next exchange id; monotonic for the lifetime of the session.
    pub(super) next_id: u64,
    /// Result of the most recent health probe.
    pub(super) status: SessionStatus,
    /// The single global error surface. Replaced wholesale, never stacked.
    pub(super) error: Option<String>,
    /// Whether the current error should open the credential entry surface.
    pub(super) credential_prompt: bool,
    /// Durable credential storage.
    pub(super) credential: CredentialStore,
    /// Cached server-side history snapshot.
    pub(super) history: HistoryCache,
    /// How many entries each history refresh requests.
    pub(super) history_limit: u32,
    /// Set while a submission is in flight (single-flight discipline).
    pub(super) in_flight: AtomicBool,
}

impl Session {
    pub fn new(credential: CredentialStore) -> Self {
        Self {
            exchanges: Vec::new(),
            next_id: 1,
            status: SessionStatus::Checking,
            error: None,
            credential_prompt: false,
            credential,
            history: HistoryCache::new(),
            history_limit: 10,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_history_limit(mut self, limit: u32) -> Self {
        self.history_limit = limit;
        self
    }

    /// The full conversation, oldest first.
    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn exchange_count(&self) -> usize {
        self.exchanges.len()
    }

    pub fn last_exchange(&self) -> Option<&Exchange> {
        self.exchanges.last()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The current global error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the UI should open the credential entry surface.
    pub fn wants_credential(&self) -> bool {
        self.credential_prompt
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_present()
    }

    /// The cached history snapshot, in server order.
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// Question text of a cached history entry, for resubmission.
    pub fn history_question(&self, index: usize) -> Option<&str> {
        self.history.entries().get(index).map(|e| e.question.as_str())
    }

    /// Save a credential. A non-empty value also dismisses a standing
    /// credential-related error; an empty value clears instead.
    pub fn set_credential(&mut self, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        if value.is_empty() {
            return self.clear_credential();
        }
        self.credential.set(value)?;
        if self.credential_prompt {
            self.error = None;
            self.credential_prompt = false;
        }
        Ok(())
    }

    /// Erase the saved credential. Once cleared it cannot be read back
    /// without the user re-entering it.
    pub fn clear_credential(&mut self) -> Result<(), ConfigError> {
        self.credential.clear()
    }

    /// Drop the local history snapshot. No remote call is made; the
    /// server's records are untouched.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

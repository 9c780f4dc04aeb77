//! Locally cached snapshot of the server-side exchange history.

use tracing::debug;

use crate::{AssistGateway, HistoryEntry};

/// The most recently fetched history list.
///
/// A refresh replaces the whole snapshot; the cache never merges or
/// re-sorts what the server returned. A failed refresh keeps the previous
/// snapshot and is not surfaced anywhere.
#[derive(Debug, Default)]
pub struct HistoryCache {
    entries: Vec<HistoryEntry>,
}

impl HistoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the snapshot with the server's current view.
    pub(super) async fn refresh(&mut self, gateway: &dyn AssistGateway, limit: u32) {
        match gateway.fetch_history(limit).await {
            Ok(entries) => {
                debug!(count = entries.len(), "history refreshed");
                self.entries = entries;
            }
            Err(e) => debug!("history refresh failed, keeping previous snapshot: {e}"),
        }
    }

    /// Drop the local snapshot. Server-side records are untouched.
    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }
}

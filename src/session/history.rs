use std::sync::Arc;

use tracing::warn;

use crate::constants::{MAX_PERSISTED_MESSAGES, STORAGE_KEY};
use crate::model::ChatMessage;
use crate::storage::KeyValueStore;

/// Loads and saves the conversation through a key-value backend.
///
/// Persistence is best-effort on both sides: a missing, malformed, or empty
/// payload loads as the caller's fallback, and a failed write leaves the
/// in-memory conversation untouched. Neither path ever blocks or fails the
/// session.
#[derive(Clone)]
pub struct HistoryStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl HistoryStore {
    /// Create a history store over a backend, using the default history key
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    /// Create a history store with an explicit key, for hosts that namespace
    /// several widget instances
    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Read the persisted conversation, falling back to the seed on any miss
    pub fn load(&self, fallback: &[ChatMessage]) -> Vec<ChatMessage> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return fallback.to_vec(),
            Err(e) => {
                warn!("Failed to read stored chat history: {e}");
                return fallback.to_vec();
            }
        };

        match serde_json::from_str::<Vec<ChatMessage>>(&raw) {
            Ok(parsed) if !parsed.is_empty() => parsed,
            Ok(_) => fallback.to_vec(),
            Err(e) => {
                warn!("Failed to parse stored chat history: {e}");
                fallback.to_vec()
            }
        }
    }

    /// Persist the tail of the conversation, capped at the history limit
    pub fn save(&self, messages: &[ChatMessage]) {
        let start = messages.len().saturating_sub(MAX_PERSISTED_MESSAGES);
        let tail = &messages[start..];

        let json = match serde_json::to_string(tail) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize chat history: {e}");
                return;
            }
        };

        if let Err(e) = self.store.set(&self.key, &json) {
            warn!("Failed to save chat history: {e}");
        }
    }
}

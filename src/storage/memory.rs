use std::collections::HashMap;

use parking_lot::Mutex;

use super::KeyValueStore;
use crate::utils::ChitChatError;

/// In-process store backed by a mutex-guarded map.
///
/// The default backend for native hosts and the deterministic choice for
/// tests; contents do not survive the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ChitChatError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ChitChatError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store for environments with no persistence at all.
///
/// Loads always miss (the session falls back to its seed conversation) and
/// writes are accepted and discarded, so the session stays usable where a
/// real backend is unavailable.
#[derive(Debug, Default)]
pub struct NullStore;

impl NullStore {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for NullStore {
    fn get(&self, _key: &str) -> Result<Option<String>, ChitChatError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), ChitChatError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("history").unwrap(), None);

        store.set("history", "[1,2,3]").unwrap();
        assert_eq!(store.get("history").unwrap(), Some("[1,2,3]".to_string()));

        store.set("history", "[]").unwrap();
        assert_eq!(store.get("history").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_null_store_discards_writes() {
        let store = NullStore::new();
        store.set("history", "anything").unwrap();
        assert_eq!(store.get("history").unwrap(), None);
    }
}

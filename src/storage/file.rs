use std::fs;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::utils::ChitChatError;

/// File-backed store keeping one JSON file per key in a directory.
///
/// A native stand-in for browser local storage: keys map to `<key>.json`
/// files under the given directory, so persisted histories survive restarts
/// and can be inspected on disk.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory, creating it if needed
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, ChitChatError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .map_err(|e| ChitChatError::PersistenceWrite(format!("{}: {e}", dir.display())))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ChitChatError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| ChitChatError::PersistenceRead(format!("{}: {e}", path.display())))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ChitChatError> {
        let path = self.path_for(key);
        fs::write(&path, value)
            .map_err(|e| ChitChatError::PersistenceWrite(format!("{}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_through_disk() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();

        assert_eq!(store.get("ecc-chat-history").unwrap(), None);

        store.set("ecc-chat-history", r#"[{"id":"1"}]"#).unwrap();
        assert_eq!(
            store.get("ecc-chat-history").unwrap(),
            Some(r#"[{"id":"1"}]"#.to_string())
        );

        // A second store over the same directory sees the same data
        let reopened = JsonFileStore::new(dir.path()).unwrap();
        assert_eq!(
            reopened.get("ecc-chat-history").unwrap(),
            Some(r#"[{"id":"1"}]"#.to_string())
        );
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("state").join("chat");
        let store = JsonFileStore::new(&nested).unwrap();
        store.set("k", "v").unwrap();
        assert!(nested.join("k.json").exists());
    }
}

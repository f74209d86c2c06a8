// Gateway module for storage - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod file;
mod memory;

// Public re-exports - the ONLY way to access storage functionality
pub use file::JsonFileStore;
pub use memory::{MemoryStore, NullStore};

use crate::utils::ChitChatError;

/// Abstract key-value string storage the history persists through.
///
/// A browser's local storage is one implementation; the backends here cover
/// tests, native hosts, and environments with no storage at all. `get` must
/// tolerate an absent key, and callers must tolerate malformed values.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, ChitChatError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ChitChatError>;
}

use thiserror::Error;

/// Main error type for the chat session core.
///
/// Nothing here is fatal: history reads fall back to the seed conversation
/// and history writes are best-effort, so these surface only in logs and in
/// the storage port's signatures.
#[derive(Error, Debug)]
pub enum ChitChatError {
    #[error("Failed to read persisted history: {0}")]
    PersistenceRead(String),

    #[error("Failed to write persisted history: {0}")]
    PersistenceWrite(String),
}

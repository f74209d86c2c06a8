use anyhow::Result;
use async_trait::async_trait;

use super::types::ChatMessage;

/// Core trait the host's language-model backend must implement.
///
/// The session treats the client as an opaque asynchronous function: it
/// receives the full ordered conversation (ending with the just-sent user
/// message) and either returns the reply text or fails with any error. One
/// request per send; no retry, no streaming.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send the conversation to the model and get a reply
    async fn reply(&self, messages: &[ChatMessage]) -> Result<String>;
}

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Who authored a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

/// A single message in the conversation.
///
/// Messages are immutable once created; reconciliation always produces a new
/// list rather than editing one in place. The serialized form matches the
/// widget's persisted history format, so a history written by an earlier
/// session restores as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Local>>,
}

impl ChatMessage {
    /// Create a message with an explicit role, stamped with the current time
    pub fn new(id: impl Into<String>, role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role,
            content: content.into(),
            created_at: Some(Local::now()),
        }
    }

    pub fn user(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, ChatRole::User, content)
    }

    pub fn assistant(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, ChatRole::Assistant, content)
    }

    pub fn system(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, ChatRole::System, content)
    }
}

/// Externally supplied availability of the chat service.
///
/// The core never owns this value; the host passes it in at session creation
/// and may update it per interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    #[default]
    Online,
    Offline,
    Maintenance,
}

impl ServiceStatus {
    /// Whether sending is disabled and the banner shown instead of messages
    pub fn is_restricted(&self) -> bool {
        matches!(self, Self::Offline | Self::Maintenance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&ChatRole::Assistant).unwrap(),
            "\"assistant\""
        );
        assert_eq!(
            serde_json::to_string(&ChatRole::System).unwrap(),
            "\"system\""
        );
    }

    #[test]
    fn test_message_round_trips_widget_format() {
        // Histories written by the original widget carry camelCase createdAt
        // and may omit it entirely
        let raw = r#"{"id":"abc","role":"assistant","content":"Hi there"}"#;
        let msg: ChatMessage = serde_json::from_str(raw).unwrap();
        assert_eq!(msg.id, "abc");
        assert_eq!(msg.role, ChatRole::Assistant);
        assert_eq!(msg.content, "Hi there");
        assert_eq!(msg.created_at, None);

        // A message without a timestamp serializes without the field
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("createdAt"));

        let stamped = ChatMessage::user("u1", "hello");
        let json = serde_json::to_string(&stamped).unwrap();
        assert!(json.contains("createdAt"));
        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stamped);
    }

    #[test]
    fn test_status_restriction() {
        assert!(!ServiceStatus::Online.is_restricted());
        assert!(ServiceStatus::Offline.is_restricted());
        assert!(ServiceStatus::Maintenance.is_restricted());
        assert_eq!(ServiceStatus::default(), ServiceStatus::Online);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ServiceStatus::Maintenance).unwrap(),
            "\"maintenance\""
        );
        let parsed: ServiceStatus = serde_json::from_str("\"offline\"").unwrap();
        assert_eq!(parsed, ServiceStatus::Offline);
    }
}

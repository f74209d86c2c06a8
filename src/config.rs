use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TITLE;
use crate::model::{ChatMessage, ServiceStatus};

/// Session creation inputs supplied by the host.
///
/// Theme and position are carried through to the render snapshot untouched;
/// the core never branches on them. The seed messages are used only when the
/// persistence backend has nothing to restore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Window title shown in the header
    #[serde(default = "default_title")]
    pub title: String,

    /// Presentation color scheme
    #[serde(default)]
    pub theme: Theme,

    /// Corner the widget floats in
    #[serde(default)]
    pub position: Position,

    /// Service availability supplied by the host at creation
    #[serde(default)]
    pub status: ServiceStatus,

    /// Seed conversation used when no history is restored
    #[serde(default)]
    pub initial_messages: Vec<ChatMessage>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            theme: Theme::default(),
            position: Position::default(),
            status: ServiceStatus::default(),
            initial_messages: Vec::new(),
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    BottomRight,
    BottomLeft,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ChatConfig::default();
        assert_eq!(config.title, "Eloquent Chit Chat");
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.position, Position::BottomRight);
        assert_eq!(config.status, ServiceStatus::Online);
        assert!(config.initial_messages.is_empty());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ChatConfig =
            serde_json::from_str(r#"{"title":"Support","position":"bottom-left"}"#).unwrap();
        assert_eq!(config.title, "Support");
        assert_eq!(config.position, Position::BottomLeft);
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn test_position_spelling_matches_widget() {
        assert_eq!(
            serde_json::to_string(&Position::BottomRight).unwrap(),
            "\"bottom-right\""
        );
    }
}

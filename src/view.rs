use crate::config::{Position, Theme};
use crate::constants::{PLACEHOLDER_READY, PLACEHOLDER_THINKING, PLACEHOLDER_UNAVAILABLE};
use crate::model::{ChatMessage, ServiceStatus};

/// Banner shown instead of the message list while the service is restricted.
///
/// Purely a function of the supplied status; it neither reads nor writes
/// session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBanner {
    pub title: &'static str,
    pub description: &'static str,
}

impl StatusBanner {
    pub fn for_status(status: ServiceStatus) -> Option<Self> {
        match status {
            ServiceStatus::Maintenance => Some(Self {
                title: "Assistant under maintenance",
                description: "The assistant is temporarily unavailable. Please try again later.",
            }),
            ServiceStatus::Offline => Some(Self {
                title: "Assistant offline",
                description: "The assistant is currently offline. Please try again soon.",
            }),
            ServiceStatus::Online => None,
        }
    }
}

/// Input placeholder text for the current gating state
pub fn input_placeholder(restricted: bool, thinking: bool) -> &'static str {
    if restricted {
        PLACEHOLDER_UNAVAILABLE
    } else if thinking {
        PLACEHOLDER_THINKING
    } else {
        PLACEHOLDER_READY
    }
}

/// Everything the presentation layer needs for one render.
///
/// The core emits this snapshot; icons, colors, and layout are the host's
/// concern.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub title: String,
    pub theme: Theme,
    pub position: Position,
    pub status: ServiceStatus,
    /// Present exactly when the status is restricted
    pub banner: Option<StatusBanner>,
    pub messages: Vec<ChatMessage>,
    pub is_open: bool,
    pub is_visible: bool,
    pub is_closing: bool,
    pub is_thinking: bool,
    pub input_enabled: bool,
    pub input_placeholder: &'static str,
}

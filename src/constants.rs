/// Constants module to avoid magic numbers in the codebase

// Persistence
pub const STORAGE_KEY: &str = "ecc-chat-history";
pub const MAX_PERSISTED_MESSAGES: usize = 10; // Limit history to prevent excessive storage usage

// Window Animation
pub const CLOSE_ANIMATION_MS: u64 = 200; // Exit animation length before the window unmounts

// Send Pipeline
pub const CLIENT_FAILURE_REPLY: &str = "Sorry, something went wrong. Please try again later.";

// Presentation Defaults
pub const DEFAULT_TITLE: &str = "Eloquent Chit Chat";

// Input Placeholders
pub const PLACEHOLDER_READY: &str = "Type a message...";
pub const PLACEHOLDER_THINKING: &str = "Awaiting response...";
pub const PLACEHOLDER_UNAVAILABLE: &str = "Service temporarily unavailable";

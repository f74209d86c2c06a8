// Gateway module for the model seam - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod traits;
mod types;

// Public re-exports - the ONLY way to access model functionality
pub use traits::ChatClient;
pub use types::{ChatMessage, ChatRole, ServiceStatus};

#[cfg(test)]
pub use traits::MockChatClient;

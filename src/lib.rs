pub mod config;
pub mod constants;
pub mod model;
pub mod session;
pub mod storage;
pub mod utils;
pub mod view;

pub use config::{ChatConfig, Position, Theme};
pub use model::{ChatClient, ChatMessage, ChatRole, ServiceStatus};
pub use session::{ChatSession, HistoryStore};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, NullStore};
pub use utils::{ChitChatError, IdGenerator, TimestampIds, UuidIds, init_logger};
pub use view::{RenderState, StatusBanner};

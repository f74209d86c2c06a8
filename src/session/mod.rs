/// Session management module - Gateway

mod controller;
mod history;
mod visibility;

pub use controller::ChatSession;
pub use history::HistoryStore;
pub use visibility::WindowPhase;

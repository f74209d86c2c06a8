use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Local;
use uuid::Uuid;

/// Source of unique message ids, injected so tests can be deterministic
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default id source: random v4 UUIDs
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Time-based fallback for environments without a random source.
///
/// A user message, its reply, and an error notice can all be created within
/// the same millisecond, so the timestamp alone is not unique; an atomic
/// counter offsets consecutive ids.
#[derive(Debug, Default)]
pub struct TimestampIds {
    counter: AtomicU64,
}

impl IdGenerator for TimestampIds {
    fn generate(&self) -> String {
        let offset = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", Local::now().timestamp_millis(), offset)
    }
}

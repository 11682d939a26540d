use std::collections::HashMap;
use std::sync::Mutex;

/// Storage key holding the full objective collection as a JSON array.
pub const OBJECTIVES_KEY: &str = "allObjectives";
/// Storage key holding the ISO-8601 time of the last collection write.
pub const TIMESTAMP_KEY: &str = "objectivesTimestamp";

/// String key-value store with session lifetime.
///
/// The seam is a trait so the repository can run against any backing; the
/// in-memory implementation below scopes the cache to one process run.
pub trait SessionStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock still holds valid string data; take it back.
    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries().remove(key);
    }
}

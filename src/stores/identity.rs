//! Identity store - process-wide persisted session state
//!
//! The access guard reads the session token from here and nothing else.
//! Reads are synchronous and infallible; the guard never writes.

use dashmap::DashMap;
use tracing::debug;

/// Capability over the process-wide key/value identity storage.
///
/// Injected into `AppState` instead of living behind a hidden global so
/// tests can drive the guard deterministically.
pub trait IdentityStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String);

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

/// Concurrent in-memory implementation backed by a `DashMap`.
#[derive(Default)]
pub struct MemoryIdentityStore {
    entries: DashMap<String, String>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: String) {
        debug!("Storing identity entry under key {}", key);
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        debug!("Removing identity entry under key {}", key);
        self.entries.remove(key);
    }
}

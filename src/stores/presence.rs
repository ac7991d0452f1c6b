//! Typing presence - who is currently typing in which thread
//!
//! A mark expires after `TYPING_TTL`; stale entries are pruned on read so
//! a client that disappears without clearing stops being shown.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::{debug, instrument};

const TYPING_TTL_SECS: i64 = 5;

pub struct PresenceMap {
    typists: DashMap<String, DashMap<String, DateTime<Utc>>>,
}

impl PresenceMap {
    pub fn new() -> Self {
        Self {
            typists: DashMap::new(),
        }
    }

    /// Mark `username` as typing in a thread, refreshing the expiry.
    #[instrument(skip(self), fields(thread_id = %thread_id, username = %username))]
    pub fn mark(&self, thread_id: &str, username: &str) {
        debug!("Marking typist");
        self.typists
            .entry(thread_id.to_string())
            .or_default()
            .insert(username.to_string(), Utc::now());
    }

    /// Clear the typing mark of `username` in a thread.
    pub fn clear(&self, thread_id: &str, username: &str) {
        if let Some(thread) = self.typists.get(thread_id) {
            thread.remove(username);
        }
    }

    /// Usernames with a fresh typing mark, sorted for stable output.
    pub fn active_typists(&self, thread_id: &str) -> Vec<String> {
        self.active_typists_at(thread_id, Utc::now())
    }

    fn active_typists_at(&self, thread_id: &str, now: DateTime<Utc>) -> Vec<String> {
        let cutoff = now - Duration::seconds(TYPING_TTL_SECS);
        let Some(thread) = self.typists.get(thread_id) else {
            return Vec::new();
        };

        thread.retain(|_, marked_at| *marked_at >= cutoff);
        let mut names: Vec<String> = thread.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }
}

impl Default for PresenceMap {
    fn default() -> Self {
        Self::new()
    }
}

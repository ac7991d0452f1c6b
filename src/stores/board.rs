//! Reply board - per-thread message log

use crate::entities::Message;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use tracing::{debug, instrument};

pub struct ReplyBoard {
    threads: DashMap<String, Vec<Message>>,
    next_id: AtomicI32,
}

impl ReplyBoard {
    pub fn new() -> Self {
        Self {
            threads: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }

    /// Append a reply to a thread, assigning id and timestamp.
    #[instrument(skip(self, content), fields(thread_id = %thread_id, sender_id = %sender_id))]
    pub fn append(&self, thread_id: &str, sender_id: &str, content: String) -> Message {
        let message = Message {
            message_id: self.next_id.fetch_add(1, Ordering::Relaxed),
            thread_id: thread_id.to_string(),
            sender_id: sender_id.to_string(),
            content,
            created_at: Utc::now(),
        };
        self.threads
            .entry(thread_id.to_string())
            .or_default()
            .push(message.clone());
        debug!("Appended reply {}", message.message_id);
        message
    }

    /// List the replies of a thread in chronological order, optionally
    /// only those older than `before_date`.
    pub fn list(&self, thread_id: &str, before_date: Option<DateTime<Utc>>) -> Vec<Message> {
        let mut replies: Vec<Message> = self
            .threads
            .get(thread_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();

        if let Some(cutoff) = before_date {
            replies.retain(|m| m.created_at < cutoff);
        }
        replies.sort_by_key(|m| (m.created_at, m.message_id));
        replies
    }
}

impl Default for ReplyBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_empty_thread() {
        let board = ReplyBoard::new();
        assert!(board.list("t1", None).is_empty());
    }

    #[test]
    fn test_append_and_list_in_order() {
        let board = ReplyBoard::new();
        board.append("t1", "u1", "first".to_string());
        board.append("t1", "u2", "second".to_string());
        board.append("t2", "u1", "elsewhere".to_string());

        let replies = board.list("t1", None);
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0].content, "first");
        assert_eq!(replies[1].content, "second");
    }

    #[test]
    fn test_before_date_cutoff() {
        let board = ReplyBoard::new();
        board.append("t1", "u1", "old".to_string());
        let cutoff = Utc::now() - chrono::Duration::hours(1);
        assert!(board.list("t1", Some(cutoff)).is_empty());
    }
}

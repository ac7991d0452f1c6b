//! Notification feed - per-user appended notifications

use crate::entities::{Notification, NotificationKind};
use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use tracing::{debug, instrument};

pub struct NotificationFeed {
    feeds: DashMap<String, Vec<Notification>>,
    next_id: AtomicI32,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self {
            feeds: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }

    /// Append a notification to a user's feed.
    #[instrument(skip(self, subject), fields(user_id = %user_id, actor_id = %actor_id))]
    pub fn push(
        &self,
        user_id: &str,
        kind: NotificationKind,
        actor_id: &str,
        subject: String,
    ) -> Notification {
        let notification = Notification {
            notification_id: self.next_id.fetch_add(1, Ordering::Relaxed),
            kind,
            actor_id: actor_id.to_string(),
            subject,
            created_at: Utc::now(),
            read: false,
        };
        self.feeds
            .entry(user_id.to_string())
            .or_default()
            .push(notification.clone());
        debug!("Pushed notification {}", notification.notification_id);
        notification
    }

    /// A user's notifications, newest first.
    pub fn list(&self, user_id: &str) -> Vec<Notification> {
        let mut notifications = self
            .feeds
            .get(user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();
        notifications.sort_by(|a, b| {
            (b.created_at, b.notification_id).cmp(&(a.created_at, a.notification_id))
        });
        notifications
    }
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self::new()
    }
}

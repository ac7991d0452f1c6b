//! Notification entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::NotificationKind;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Notification {
    pub notification_id: i32,
    pub kind: NotificationKind,
    /// User that caused the notification (requester, replier, ...)
    pub actor_id: String,
    pub subject: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

//! Notification DTOs

use crate::entities::{Notification, NotificationKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NotificationDTO {
    pub notification_id: Option<i32>,
    pub kind: Option<NotificationKind>,
    pub actor_id: Option<String>,
    pub subject: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub read: Option<bool>,
}

impl From<Notification> for NotificationDTO {
    fn from(value: Notification) -> Self {
        Self {
            notification_id: Some(value.notification_id),
            kind: Some(value.kind),
            actor_id: Some(value.actor_id),
            subject: Some(value.subject),
            created_at: Some(value.created_at),
            read: Some(value.read),
        }
    }
}

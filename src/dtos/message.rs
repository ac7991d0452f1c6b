//! Message DTOs - reply input/output shapes

use crate::entities::Message;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageDTO {
    pub message_id: Option<i32>,
    pub thread_id: Option<String>,
    pub sender_id: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Message> for MessageDTO {
    fn from(value: Message) -> Self {
        Self {
            message_id: Some(value.message_id),
            thread_id: Some(value.thread_id),
            sender_id: Some(value.sender_id),
            content: Some(value.content),
            created_at: Some(value.created_at),
        }
    }
}

/// DTO for posting a new reply (the id and timestamp are assigned by the board)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateReplyDTO {
    #[validate(length(min = 1, message = "Sender id must not be empty"))]
    pub sender_id: String,

    #[validate(length(min = 1, max = 5000, message = "Reply content must be between 1 and 5000 characters"))]
    pub content: String,
}

//! Message entity - a reply inside a discussion thread

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Message {
    pub message_id: i32,
    pub thread_id: String,
    pub sender_id: String,
    pub content: String,
    // serde parses the wire representation as an ISO-8601 UTC timestamp
    pub created_at: DateTime<Utc>,
}

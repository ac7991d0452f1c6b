//! Friend and FriendRequest entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::FriendRequestState;

/// A confirmed friendship edge, as displayed in a friend list.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Friend {
    pub user_id: String,
    pub username: String,
    pub since: DateTime<Utc>,
}

/// A pending or resolved friend request. Requests are unique per
/// (from_id, to_id) pair and resolve at most once.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FriendRequest {
    pub request_id: i32,
    pub from_id: String,
    pub to_id: String,
    pub state: FriendRequestState,
    pub created_at: DateTime<Utc>,
}

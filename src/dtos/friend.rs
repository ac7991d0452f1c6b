//! Friend DTOs

use crate::entities::{Friend, FriendRequest, FriendRequestState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FriendDTO {
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub since: Option<DateTime<Utc>>,
}

impl From<Friend> for FriendDTO {
    fn from(value: Friend) -> Self {
        Self {
            user_id: Some(value.user_id),
            username: Some(value.username),
            since: Some(value.since),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FriendRequestDTO {
    pub request_id: Option<i32>,
    pub from_id: Option<String>,
    pub to_id: Option<String>,
    pub state: Option<FriendRequestState>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<FriendRequest> for FriendRequestDTO {
    fn from(value: FriendRequest) -> Self {
        Self {
            request_id: Some(value.request_id),
            from_id: Some(value.from_id),
            to_id: Some(value.to_id),
            state: Some(value.state),
            created_at: Some(value.created_at),
        }
    }
}

/// DTO for sending a new friend request (id, state and timestamp are
/// assigned by the ledger)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateFriendRequestDTO {
    #[validate(length(min = 1, message = "Sender id must not be empty"))]
    pub from_id: String,

    #[validate(length(min = 1, message = "Recipient id must not be empty"))]
    pub to_id: String,
}

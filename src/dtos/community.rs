//! Community DTOs

use crate::entities::{Community, CommunityKind};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CommunityDTO {
    pub community_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: Option<CommunityKind>,
    pub member_count: Option<u32>,
}

impl From<Community> for CommunityDTO {
    fn from(value: Community) -> Self {
        Self {
            community_id: Some(value.community_id),
            title: Some(value.title),
            description: value.description,
            kind: Some(value.kind),
            member_count: Some(value.member_count),
        }
    }
}

/// DTO for creating a new community or group (community_id assigned by the index)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateCommunityDTO {
    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    pub kind: CommunityKind,
}

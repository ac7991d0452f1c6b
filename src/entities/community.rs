//! Community entity and its list projection

use serde::{Deserialize, Serialize};

use super::enums::CommunityKind;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Community {
    pub community_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub kind: CommunityKind,
    pub member_count: u32,
}

/// Lightweight shape used by list views, derived from [`Community`].
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CommunitySummary {
    pub community_id: i32,
    pub title: String,
    pub kind: CommunityKind,
    pub member_count: u32,
}

impl From<&Community> for CommunitySummary {
    fn from(value: &Community) -> Self {
        Self {
            community_id: value.community_id,
            title: value.title.clone(),
            kind: value.kind.clone(),
            member_count: value.member_count,
        }
    }
}

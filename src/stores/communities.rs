//! Community index

use crate::entities::{Community, CommunityKind, CommunitySummary};
use dashmap::DashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use tracing::{info, instrument};

pub struct CommunityIndex {
    communities: DashMap<i32, Community>,
    next_id: AtomicI32,
}

impl CommunityIndex {
    pub fn new() -> Self {
        Self {
            communities: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }

    #[instrument(skip(self, description), fields(title = %title))]
    pub fn create(
        &self,
        title: &str,
        description: Option<String>,
        kind: CommunityKind,
    ) -> Community {
        let community = Community {
            community_id: self.next_id.fetch_add(1, Ordering::Relaxed),
            title: title.to_string(),
            description,
            kind,
            member_count: 1,
        };
        self.communities
            .insert(community.community_id, community.clone());
        info!("Created community {}", community.community_id);
        community
    }

    pub fn list(&self) -> Vec<Community> {
        let mut all: Vec<Community> = self
            .communities
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by_key(|c| c.community_id);
        all
    }

    /// Lightweight projection for list views.
    pub fn summaries(&self) -> Vec<CommunitySummary> {
        self.list().iter().map(CommunitySummary::from).collect()
    }
}

impl Default for CommunityIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_list() {
        let index = CommunityIndex::new();
        index.create("rustaceans", None, CommunityKind::Community);
        index.create("book club", Some("weekly".to_string()), CommunityKind::Group);

        let all = index.list();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "rustaceans");
        assert_eq!(all[1].kind, CommunityKind::Group);
    }

    #[test]
    fn test_summaries_project_fields() {
        let index = CommunityIndex::new();
        index.create("rustaceans", Some("hidden".to_string()), CommunityKind::Community);

        let summaries = index.summaries();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].title, "rustaceans");
        assert_eq!(summaries[0].member_count, 1);
    }
}

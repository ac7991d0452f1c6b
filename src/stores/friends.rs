//! Friend graph - confirmed friendship edges
//!
//! Accepting a request links both directions; the graph stays symmetric.

use crate::entities::Friend;
use chrono::Utc;
use dashmap::DashMap;
use tracing::{info, instrument};

pub struct FriendGraph {
    edges: DashMap<String, Vec<Friend>>,
}

impl FriendGraph {
    pub fn new() -> Self {
        Self {
            edges: DashMap::new(),
        }
    }

    /// Link two users as friends, in both directions.
    #[instrument(skip(self), fields(a_id = %a_id, b_id = %b_id))]
    pub fn link(&self, a_id: &str, a_username: &str, b_id: &str, b_username: &str) {
        let since = Utc::now();
        self.edges.entry(a_id.to_string()).or_default().push(Friend {
            user_id: b_id.to_string(),
            username: b_username.to_string(),
            since,
        });
        self.edges.entry(b_id.to_string()).or_default().push(Friend {
            user_id: a_id.to_string(),
            username: a_username.to_string(),
            since,
        });
        info!("Linked friends");
    }

    pub fn friends_of(&self, user_id: &str) -> Vec<Friend> {
        self.edges
            .get(user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    pub fn are_friends(&self, a_id: &str, b_id: &str) -> bool {
        self.edges
            .get(a_id)
            .map(|entry| entry.value().iter().any(|f| f.user_id == b_id))
            .unwrap_or(false)
    }
}

impl Default for FriendGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_is_symmetric() {
        let graph = FriendGraph::new();
        graph.link("u1", "alice", "u2", "bob");

        assert!(graph.are_friends("u1", "u2"));
        assert!(graph.are_friends("u2", "u1"));
        assert_eq!(graph.friends_of("u1")[0].username, "bob");
        assert_eq!(graph.friends_of("u2")[0].username, "alice");
    }

    #[test]
    fn test_no_edges_for_stranger() {
        let graph = FriendGraph::new();
        assert!(graph.friends_of("u9").is_empty());
        assert!(!graph.are_friends("u9", "u1"));
    }
}

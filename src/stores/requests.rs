//! Friend request ledger
//!
//! Requests transition only from Pending to Accepted or Rejected, once.

use crate::entities::{FriendRequest, FriendRequestState};
use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use tracing::{info, instrument, warn};

#[derive(Debug, PartialEq)]
pub enum ResolveError {
    NotFound,
    AlreadyResolved,
}

pub struct FriendRequestLedger {
    requests: DashMap<i32, FriendRequest>,
    next_id: AtomicI32,
}

impl FriendRequestLedger {
    pub fn new() -> Self {
        Self {
            requests: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }

    /// True if a pending request between the pair already exists, in
    /// either direction.
    pub fn has_pending_between(&self, a: &str, b: &str) -> bool {
        self.requests.iter().any(|entry| {
            let r = entry.value();
            r.state == FriendRequestState::Pending
                && ((r.from_id == a && r.to_id == b) || (r.from_id == b && r.to_id == a))
        })
    }

    #[instrument(skip(self), fields(from_id = %from_id, to_id = %to_id))]
    pub fn create(&self, from_id: &str, to_id: &str) -> FriendRequest {
        let request = FriendRequest {
            request_id: self.next_id.fetch_add(1, Ordering::Relaxed),
            from_id: from_id.to_string(),
            to_id: to_id.to_string(),
            state: FriendRequestState::Pending,
            created_at: Utc::now(),
        };
        self.requests.insert(request.request_id, request.clone());
        info!("Created friend request {}", request.request_id);
        request
    }

    /// Resolve a pending request. Resolution is final.
    #[instrument(skip(self), fields(request_id = %request_id))]
    pub fn resolve(
        &self,
        request_id: i32,
        state: FriendRequestState,
    ) -> Result<FriendRequest, ResolveError> {
        let mut entry = self
            .requests
            .get_mut(&request_id)
            .ok_or(ResolveError::NotFound)?;

        if entry.state != FriendRequestState::Pending {
            warn!("Request {} already resolved", request_id);
            return Err(ResolveError::AlreadyResolved);
        }
        entry.state = state;
        info!("Resolved friend request {} as {:?}", request_id, entry.state);
        Ok(entry.clone())
    }

    /// Pending requests addressed to `user_id`, oldest first.
    pub fn pending_for(&self, user_id: &str) -> Vec<FriendRequest> {
        let mut pending: Vec<FriendRequest> = self
            .requests
            .iter()
            .filter(|entry| {
                entry.value().to_id == user_id
                    && entry.value().state == FriendRequestState::Pending
            })
            .map(|entry| entry.value().clone())
            .collect();
        pending.sort_by_key(|r| (r.created_at, r.request_id));
        pending
    }
}

impl Default for FriendRequestLedger {
    fn default() -> Self {
        Self::new()
    }
}

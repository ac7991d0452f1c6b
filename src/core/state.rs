//! Application state shared across routes and middleware

use crate::core::guard::{LogNavigator, Navigator};
use crate::stores::{
    CommunityIndex, FriendGraph, FriendRequestLedger, IdentityStore, MemoryIdentityStore,
    NotificationFeed, PresenceMap, ReplyBoard, UserDirectory,
};
use crate::upstream::ReportTransport;
use std::sync::Arc;

pub struct AppState {
    /// Process-wide identity storage read by the access guard
    pub identity: Arc<dyn IdentityStore>,

    /// Navigation capability notified on redirects
    pub navigator: Arc<dyn Navigator>,

    /// Upstream transport for report submission
    pub reports: Arc<dyn ReportTransport>,

    /// Registered accounts
    pub directory: UserDirectory,

    /// Per-thread reply log
    pub board: ReplyBoard,

    /// Typing presence per thread
    pub presence: PresenceMap,

    /// Friend request ledger
    pub requests: FriendRequestLedger,

    /// Confirmed friendships
    pub friends: FriendGraph,

    /// Per-user notification feeds
    pub notifications: NotificationFeed,

    /// Communities and groups
    pub communities: CommunityIndex,

    /// Secret used to mint session tokens at login
    pub session_secret: String,
}

impl AppState {
    /// State with production capabilities (in-memory identity store and
    /// logging navigator).
    pub fn new(reports: Arc<dyn ReportTransport>, session_secret: String) -> Self {
        Self::with_capabilities(
            Arc::new(MemoryIdentityStore::new()),
            Arc::new(LogNavigator),
            reports,
            session_secret,
        )
    }

    /// State with explicitly injected capabilities, used by tests to
    /// observe the guard's decisions deterministically.
    pub fn with_capabilities(
        identity: Arc<dyn IdentityStore>,
        navigator: Arc<dyn Navigator>,
        reports: Arc<dyn ReportTransport>,
        session_secret: String,
    ) -> Self {
        Self {
            identity,
            navigator,
            reports,
            directory: UserDirectory::new(),
            board: ReplyBoard::new(),
            presence: PresenceMap::new(),
            requests: FriendRequestLedger::new(),
            friends: FriendGraph::new(),
            notifications: NotificationFeed::new(),
            communities: CommunityIndex::new(),
            session_secret,
        }
    }
}

//! Stores module - in-process state
//!
//! The application keeps all of its state in concurrent maps shared through
//! `AppState`. The identity store sits behind a trait so tests can observe
//! or replace it without a real persistence layer.

pub mod board;
pub mod communities;
pub mod directory;
pub mod friends;
pub mod identity;
pub mod notifications;
pub mod presence;
pub mod requests;

// Re-exports to keep imports short
pub use board::ReplyBoard;
pub use communities::CommunityIndex;
pub use directory::UserDirectory;
pub use friends::FriendGraph;
pub use identity::{IdentityStore, MemoryIdentityStore};
pub use notifications::NotificationFeed;
pub use presence::PresenceMap;
pub use requests::{FriendRequestLedger, ResolveError};

//! Entities module - passive domain records
//!
//! Every record here is a plain value shape constraining what the client
//! displays. Only `UserAccount` carries behavior (password hashing).

pub mod community;
pub mod enums;
pub mod friend;
pub mod message;
pub mod notification;
pub mod user;

// Re-exports to keep imports short
pub use community::{Community, CommunitySummary};
pub use enums::{CommunityKind, FriendRequestState, NotificationKind};
pub use friend::{Friend, FriendRequest};
pub use message::Message;
pub use notification::Notification;
pub use user::UserAccount;

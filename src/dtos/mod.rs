//! DTOs module - Data Transfer Objects
//!
//! DTOs separate the external (API) representation from the internal
//! entities. Response DTOs use optional fields and `From<Entity>`
//! conversions; request DTOs carry `validator` rules.

pub mod community;
pub mod friend;
pub mod message;
pub mod notification;
pub mod query;
pub mod report;
pub mod user;

// Re-exports to keep imports short
pub use community::{CommunityDTO, CreateCommunityDTO};
pub use friend::{CreateFriendRequestDTO, FriendDTO, FriendRequestDTO};
pub use message::{CreateReplyDTO, MessageDTO};
pub use notification::NotificationDTO;
pub use query::RepliesQuery;
pub use report::{CreateReportDTO, ReportEnvelope};
pub use user::{CreateUserDTO, UserDTO};

//! Services module - HTTP handlers grouped per functional area

pub mod auth;
pub mod community;
pub mod friend;
pub mod notification;
pub mod report;
pub mod thread;

// Re-exports to keep the router wiring short
pub use auth::{login_page, login_user, logout_user, register_user};
pub use community::{create_community, list_communities, list_community_summaries};
pub use friend::{
    list_friends, list_pending_requests, respond_to_friend_request, send_friend_request,
};
pub use notification::list_notifications;
pub use report::submit_report;
pub use thread::{list_replies, post_reply, set_typing, typing_status};

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "rookery is running!")
}

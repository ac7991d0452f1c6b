//! rookery - backend-for-frontend of a small social-networking client
//!
//! Exposes the main modules for the integration tests and wires the
//! router. Everything behind the guarded areas requires a session token
//! in the identity store; anonymous visitors get redirected to `/login`.

pub mod config;
pub mod core;
pub mod dtos;
pub mod entities;
pub mod services;
pub mod stores;
pub mod upstream;
pub mod views;

// Re-export the main types to keep imports short
pub use crate::core::{AppError, AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Build the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    use crate::services::*;

    Router::new()
        .route("/", get(root))
        .route("/login", get(login_page))
        .nest("/auth", configure_auth_routes())
        .nest("/reports", configure_report_routes(state.clone()))
        .nest("/threads", configure_thread_routes(state.clone()))
        .nest("/friends", configure_friend_routes(state.clone()))
        .nest("/users", configure_user_routes(state.clone()))
        .nest("/communities", configure_community_routes(state.clone()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Auth routes (register, login, logout) - deliberately outside the guard
fn configure_auth_routes() -> Router<Arc<AppState>> {
    use crate::services::*;
    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .route("/logout", post(logout_user))
}

/// Report submission, guarded
fn configure_report_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::access_guard;
    use crate::services::*;

    Router::new()
        .route("/", post(submit_report))
        .layer(middleware::from_fn_with_state(state, access_guard))
}

/// Thread routes (replies and typing presence), guarded
fn configure_thread_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::access_guard;
    use crate::services::*;

    Router::new()
        .route("/{thread_id}/replies", get(list_replies).post(post_reply))
        .route("/{thread_id}/typing", get(typing_status).post(set_typing))
        .layer(middleware::from_fn_with_state(state, access_guard))
}

/// Friend request routes, guarded
fn configure_friend_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::access_guard;
    use crate::services::*;

    Router::new()
        .route("/requests", post(send_friend_request))
        .route("/requests/pending/{user_id}", get(list_pending_requests))
        .route(
            "/requests/{request_id}/{action}",
            post(respond_to_friend_request),
        )
        .layer(middleware::from_fn_with_state(state, access_guard))
}

/// Per-user display routes (friends, notifications), guarded
fn configure_user_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::access_guard;
    use crate::services::*;

    Router::new()
        .route("/{user_id}/friends", get(list_friends))
        .route("/{user_id}/notifications", get(list_notifications))
        .layer(middleware::from_fn_with_state(state, access_guard))
}

/// Community routes, guarded
fn configure_community_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::access_guard;
    use crate::services::*;

    Router::new()
        .route("/", get(list_communities).post(create_community))
        .route("/summaries", get(list_community_summaries))
        .layer(middleware::from_fn_with_state(state, access_guard))
}

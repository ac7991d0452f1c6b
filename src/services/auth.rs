//! Auth services - registration, login and logout
//!
//! Login is the only writer of the session token the access guard reads;
//! logout is the only remover. The guard itself never writes.

use crate::core::{AppError, AppState, IDENTITY_KEY, mint_session_token};
use crate::dtos::{CreateUserDTO, UserDTO};
use crate::entities::UserAccount;
use axum::{
    extract::{Json, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

/// DTO for the login body (username and password only)
#[derive(serde::Deserialize)]
pub struct LoginDTO {
    pub username: String,
    pub password: String,
}

/// The fixed login destination anonymous visitors are redirected to.
pub async fn login_page() -> impl IntoResponse {
    Json(json!({ "message": "Sign in to continue" }))
}

#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateUserDTO>,
) -> Result<Json<UserDTO>, AppError> {
    body.validate()?;

    if state.directory.find_by_username(&body.username).is_some() {
        warn!("Username already taken");
        return Err(AppError::conflict("Username already exists"));
    }

    let password_hash = UserAccount::hash_password(&body.password)
        .map_err(|_| AppError::internal_server_error("Failed to hash password"))?;

    let account = state.directory.create(&body.username, password_hash);
    info!("Registered new account");
    Ok(Json(UserDTO::from(account)))
}

#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDTO>,
) -> Result<impl IntoResponse, AppError> {
    let account = match state.directory.find_by_username(&body.username) {
        Some(account) => account,
        None => {
            warn!("Login attempt for unknown username");
            return Err(AppError::unauthorized("Username or password are not correct"));
        }
    };

    if !account.verify_password(&body.password) {
        warn!("Wrong password");
        return Err(AppError::unauthorized("Username or password are not correct"));
    }

    let token = mint_session_token(account.username, account.user_id, &state.session_secret)?;

    // The write the guard depends on: one token under the fixed key
    state.identity.set(IDENTITY_KEY, token.clone());

    let cookie_value = format!(
        "token={}; HttpOnly; Secure; SameSite=Lax; Max-Age={}",
        token,
        24 * 60 * 60
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        "Set-Cookie",
        HeaderValue::from_str(&cookie_value)
            .map_err(|_| AppError::internal_server_error("Invalid cookie value"))?,
    );
    headers.insert(
        "Authorization",
        HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| AppError::internal_server_error("Invalid header value"))?,
    );

    info!("Login successful");
    Ok((StatusCode::OK, headers))
}

#[instrument(skip(state))]
pub async fn logout_user(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    state.identity.remove(IDENTITY_KEY);

    // Expire the cookie client-side as well
    let cookie = "token=; HttpOnly; Secure; SameSite=Lax; Path=/; Max-Age=0";
    let mut headers = HeaderMap::new();
    headers.insert(
        "Set-Cookie",
        HeaderValue::from_str(cookie)
            .map_err(|_| AppError::internal_server_error("Invalid cookie value"))?,
    );

    info!("Logged out");
    Ok((StatusCode::OK, headers, "Logged out"))
}

//! Access guard - gates protected routes behind session-token presence
//!
//! The decision core is pure (token -> verdict); the middleware is the
//! effectful shell reading the identity store and notifying the navigation
//! capability. The guard checks presence only: it never decodes the token,
//! so a stale-but-present token still passes the gate.

use crate::core::{AppError, AppState};
use axum::{
    body::Body,
    extract::{Request, State},
    http::Response,
    middleware::Next,
    response::{IntoResponse, Redirect},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Fixed key under which the session token is persisted.
pub const IDENTITY_KEY: &str = "userId";

/// Fixed destination anonymous visitors are sent to.
pub const LOGIN_DESTINATION: &str = "/login";

/// Verdict of the pure decision core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Authorized,
    Redirect,
}

/// Decide whether a stored token authorizes access.
///
/// Absent or empty means anonymous; any non-empty value passes. Validity
/// (expiry, signature) is deliberately not inspected.
pub fn evaluate(token: Option<&str>) -> AccessDecision {
    match token {
        Some(token) if !token.is_empty() => AccessDecision::Authorized,
        _ => AccessDecision::Redirect,
    }
}

/// Capability performing the fire-and-forget navigation side effect.
/// The caller does not await or observe its completion.
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: &str);
}

/// Production navigator: the HTTP redirect response is the actual
/// navigation, so this only records the event.
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, destination: &str) {
        info!("Redirecting anonymous visitor to {}", destination);
    }
}

// Claims encoded into the session token at login
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    pub id: i32,
    pub username: String,
}

/// Mint an opaque session token for a freshly logged-in user.
///
/// The guard treats the result as an opaque string; the claims only matter
/// to collaborators that choose to decode it.
#[instrument(skip(secret), fields(username = %username, id = %id))]
pub fn mint_session_token(
    username: String,
    id: i32,
    secret: &str,
) -> Result<String, AppError> {
    debug!("Minting session token");
    let now = Utc::now();
    let expire = Duration::hours(24);
    let claims = Claims {
        iat: now.timestamp() as usize,
        exp: (now + expire).timestamp() as usize,
        id,
        username,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

/// Middleware gating protected routes.
///
/// Evaluated once per request: token present means the wrapped handler's
/// output passes through verbatim; token absent means exactly one
/// navigation to the login destination and the handler is never invoked.
#[instrument(skip(state, req, next))]
pub async fn access_guard(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running access guard");
    let token = state.identity.get(IDENTITY_KEY);

    match evaluate(token.as_deref()) {
        AccessDecision::Authorized => Ok(next.run(req).await),
        AccessDecision::Redirect => {
            warn!("No session token present");
            state.navigator.navigate(LOGIN_DESTINATION);
            Ok(Redirect::to(LOGIN_DESTINATION).into_response())
        }
    }
}

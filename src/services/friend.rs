//! Friend services - requests and friend listings

use crate::core::{AppError, AppState};
use crate::dtos::{CreateFriendRequestDTO, FriendDTO, FriendRequestDTO};
use crate::entities::{FriendRequestState, NotificationKind};
use crate::stores::ResolveError;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, body), fields(from_id = %body.from_id, to_id = %body.to_id))]
pub async fn send_friend_request(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateFriendRequestDTO>,
) -> Result<(StatusCode, Json<FriendRequestDTO>), AppError> {
    body.validate()?;

    if body.from_id == body.to_id {
        return Err(AppError::bad_request("Cannot send a friend request to yourself"));
    }
    if state.friends.are_friends(&body.from_id, &body.to_id) {
        return Err(AppError::conflict("Already friends"));
    }
    if state.requests.has_pending_between(&body.from_id, &body.to_id) {
        warn!("Duplicate friend request");
        return Err(AppError::conflict("A pending request already exists"));
    }

    let request = state.requests.create(&body.from_id, &body.to_id);
    state.notifications.push(
        &body.to_id,
        NotificationKind::FriendRequest,
        &body.from_id,
        "sent you a friend request".to_string(),
    );

    info!("Friend request sent");
    Ok((StatusCode::CREATED, Json(FriendRequestDTO::from(request))))
}

#[instrument(skip(state), fields(request_id = %request_id, action = %action))]
pub async fn respond_to_friend_request(
    State(state): State<Arc<AppState>>,
    Path((request_id, action)): Path<(i32, String)>,
) -> Result<Json<FriendRequestDTO>, AppError> {
    let target_state = match action.as_str() {
        "accept" => FriendRequestState::Accepted,
        "reject" => FriendRequestState::Rejected,
        _ => return Err(AppError::bad_request("Action must be 'accept' or 'reject'")),
    };

    let request = state
        .requests
        .resolve(request_id, target_state)
        .map_err(|err| match err {
            ResolveError::NotFound => AppError::not_found("Friend request not found"),
            ResolveError::AlreadyResolved => AppError::conflict("Friend request already resolved"),
        })?;

    if request.state == FriendRequestState::Accepted {
        // Registered accounts get their display name, opaque ids pass through
        let display = |id: &str| {
            id.parse::<i32>()
                .ok()
                .and_then(|account_id| state.directory.read(&account_id))
                .or_else(|| state.directory.find_by_username(id))
                .map(|account| account.username)
                .unwrap_or_else(|| id.to_string())
        };
        state.friends.link(
            &request.from_id,
            &display(&request.from_id),
            &request.to_id,
            &display(&request.to_id),
        );
        state.notifications.push(
            &request.from_id,
            NotificationKind::FriendAccepted,
            &request.to_id,
            "accepted your friend request".to_string(),
        );
    }

    info!("Friend request {} resolved as {:?}", request_id, request.state);
    Ok(Json(FriendRequestDTO::from(request)))
}

#[instrument(skip(state), fields(user_id = %user_id))]
pub async fn list_pending_requests(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<FriendRequestDTO>>, AppError> {
    debug!("Listing pending friend requests");
    let pending = state
        .requests
        .pending_for(&user_id)
        .into_iter()
        .map(FriendRequestDTO::from)
        .collect::<Vec<_>>();
    Ok(Json(pending))
}

#[instrument(skip(state), fields(user_id = %user_id))]
pub async fn list_friends(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<FriendDTO>>, AppError> {
    debug!("Listing friends");
    let friends = state
        .friends
        .friends_of(&user_id)
        .into_iter()
        .map(FriendDTO::from)
        .collect::<Vec<_>>();
    info!("Found {} friends", friends.len());
    Ok(Json(friends))
}

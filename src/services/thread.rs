//! Thread services - reply listing/posting and typing presence

use crate::core::{AppError, AppState};
use crate::dtos::{CreateReplyDTO, MessageDTO, RepliesQuery};
use crate::views::{ReplyListView, TypingIndicatorView, render_reply_list, render_typing_indicator};
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use validator::Validate;

#[instrument(skip(state), fields(thread_id = %thread_id))]
pub async fn list_replies(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
    Query(params): Query<RepliesQuery>,
) -> Result<Json<ReplyListView>, AppError> {
    debug!("Listing replies");
    let replies = state.board.list(&thread_id, params.before_date);
    info!("Found {} replies", replies.len());
    Ok(Json(render_reply_list(&thread_id, replies)))
}

#[instrument(skip(state, body), fields(thread_id = %thread_id, sender_id = %body.sender_id))]
pub async fn post_reply(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
    Json(body): Json<CreateReplyDTO>,
) -> Result<(StatusCode, Json<MessageDTO>), AppError> {
    body.validate()?;

    let message = state.board.append(&thread_id, &body.sender_id, body.content);
    // Posting ends the sender's typing state
    state.presence.clear(&thread_id, &body.sender_id);

    info!("Posted reply {}", message.message_id);
    Ok((StatusCode::CREATED, Json(MessageDTO::from(message))))
}

/// DTO for typing updates (start or stop)
#[derive(serde::Deserialize)]
pub struct TypingUpdateDTO {
    pub username: String,
    pub typing: bool,
}

#[instrument(skip(state, body), fields(thread_id = %thread_id, username = %body.username))]
pub async fn set_typing(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
    Json(body): Json<TypingUpdateDTO>,
) -> Result<StatusCode, AppError> {
    if body.username.is_empty() {
        return Err(AppError::bad_request("Username must not be empty"));
    }

    if body.typing {
        state.presence.mark(&thread_id, &body.username);
    } else {
        state.presence.clear(&thread_id, &body.username);
    }
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state), fields(thread_id = %thread_id))]
pub async fn typing_status(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
) -> Result<Json<TypingIndicatorView>, AppError> {
    let typists = state.presence.active_typists(&thread_id);
    Ok(Json(render_typing_indicator(&typists)))
}

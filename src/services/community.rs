//! Community services

use crate::core::{AppError, AppState};
use crate::dtos::{CommunityDTO, CreateCommunityDTO};
use crate::entities::CommunitySummary;
use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use validator::Validate;

#[instrument(skip(state, body), fields(title = %body.title))]
pub async fn create_community(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateCommunityDTO>,
) -> Result<(StatusCode, Json<CommunityDTO>), AppError> {
    body.validate()?;

    let community = state
        .communities
        .create(&body.title, body.description, body.kind);
    info!("Created community {}", community.community_id);
    Ok((StatusCode::CREATED, Json(CommunityDTO::from(community))))
}

#[instrument(skip(state))]
pub async fn list_communities(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CommunityDTO>>, AppError> {
    debug!("Listing communities");
    let communities = state
        .communities
        .list()
        .into_iter()
        .map(CommunityDTO::from)
        .collect::<Vec<_>>();
    Ok(Json(communities))
}

#[instrument(skip(state))]
pub async fn list_community_summaries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CommunitySummary>>, AppError> {
    debug!("Listing community summaries");
    Ok(Json(state.communities.summaries()))
}

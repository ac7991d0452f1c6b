//! Notification services

use crate::core::{AppError, AppState};
use crate::dtos::NotificationDTO;
use axum::extract::{Json, Path, State};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip(state), fields(user_id = %user_id))]
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<NotificationDTO>>, AppError> {
    debug!("Listing notifications");
    let notifications = state
        .notifications
        .list(&user_id)
        .into_iter()
        .map(NotificationDTO::from)
        .collect::<Vec<_>>();
    Ok(Json(notifications))
}

//! Report service - thin wrapper over the moderation upstream
//!
//! Validates the body, forwards it, and surfaces the upstream outcome
//! unchanged. No retry, no error mapping beyond the transport conversion.

use crate::core::{AppError, AppState};
use crate::dtos::{CreateReportDTO, ReportEnvelope};
use axum::extract::{Json, State};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

#[debug_handler]
#[instrument(skip(state, body), fields(post_id = %body.post_id, reporter_id = %body.reporter_id))]
pub async fn submit_report(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateReportDTO>,
) -> Result<Json<ReportEnvelope>, AppError> {
    body.validate()?;

    let envelope = state.reports.submit(&body).await?;
    info!("Report accepted by upstream: success={}", envelope.success);
    Ok(Json(envelope))
}

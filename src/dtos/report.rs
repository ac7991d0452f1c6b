//! Report DTOs - wire shapes for the moderation upstream
//!
//! The upstream expects camelCase field names, so both shapes carry the
//! rename and can be forwarded as-is.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /reports`, forwarded unchanged to the upstream.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportDTO {
    #[validate(length(min = 1, message = "Post id must not be empty"))]
    pub post_id: String,

    #[validate(length(min = 1, message = "Reporter id must not be empty"))]
    pub reporter_id: String,

    #[validate(length(min = 1, max = 2000, message = "Description must be between 1 and 2000 characters"))]
    pub description: String,
}

/// Generic response envelope returned by the upstream, surfaced to the
/// caller unchanged.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReportEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

//! Query DTOs - query-string parameters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pagination parameters for reply listings
#[derive(Serialize, Deserialize, Debug)]
pub struct RepliesQuery {
    #[serde(default)]
    pub before_date: Option<DateTime<Utc>>,
}

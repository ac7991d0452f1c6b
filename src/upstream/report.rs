//! Report transport - thin wrapper around the moderation upstream
//!
//! The upstream is an opaque collaborator: the wrapper forwards the report
//! and surfaces whatever comes back, with no retry and no local recovery.

use crate::dtos::{CreateReportDTO, ReportEnvelope};
use async_trait::async_trait;
use std::fmt;
use tracing::{debug, instrument, warn};

/// Failure of the upstream call, either on the wire or as a non-success
/// status. Carried to the caller unchanged.
#[derive(Debug)]
pub enum TransportError {
    Network(String),
    Rejected { status: u16, body: String },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(reason) => write!(f, "transport error: {}", reason),
            Self::Rejected { status, body } => {
                write!(f, "upstream rejected report with status {}: {}", status, body)
            }
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Capability for submitting a report to the moderation upstream.
#[async_trait]
pub trait ReportTransport: Send + Sync {
    async fn submit(&self, report: &CreateReportDTO) -> Result<ReportEnvelope, TransportError>;
}

/// Production implementation posting to `{base_url}/reports`.
pub struct HttpReportTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpReportTransport {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl ReportTransport for HttpReportTransport {
    #[instrument(skip(self, report), fields(post_id = %report.post_id))]
    async fn submit(&self, report: &CreateReportDTO) -> Result<ReportEnvelope, TransportError> {
        debug!("Submitting report to upstream");
        let response = self
            .client
            .post(format!("{}/reports", self.base_url))
            .json(report)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Upstream rejected report with status {}", status);
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let envelope = response.json::<ReportEnvelope>().await?;
        Ok(envelope)
    }
}

//! Upstream module - outbound collaborators

pub mod report;

pub use report::{HttpReportTransport, ReportTransport, TransportError};

//! DTOs for notification dispatch.

use serde::Serialize;

use crate::application::services::DispatchReport;

/// Outcome counts for one dispatch run.
#[derive(Debug, Serialize)]
pub struct NotificationDispatchResponse {
    pub sent: usize,
    pub failed: usize,
}

impl From<DispatchReport> for NotificationDispatchResponse {
    fn from(report: DispatchReport) -> Self {
        Self {
            sent: report.sent,
            failed: report.failed,
        }
    }
}

//! Handler for notification dispatch.

use axum::{extract::State, Json};

use crate::api::dto::notification::NotificationDispatchResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Dispatches the recruitment-update email to the configured recipient
/// list.
///
/// # Endpoint
///
/// `POST /api/notifications/recruitment-update`
///
/// Per-recipient failures are counted, not fatal: the response is 200 with
/// `sent`/`failed` totals.
pub async fn recruitment_update_handler(
    State(state): State<AppState>,
) -> Result<Json<NotificationDispatchResponse>, AppError> {
    let report = state.notification_service.send_recruitment_updates().await;

    Ok(Json(report.into()))
}

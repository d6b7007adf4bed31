//! Handlers for the student dashboard and batch contact lookup.

use axum::{extract::State, Json};

use crate::api::dto::student::{
    DashboardRequest, DashboardResponse, StudentBatchRequest, StudentBatchResponse,
    StudentContactItem,
};
use crate::error::AppError;
use crate::state::AppState;

/// Assembles the dashboard for one student: identity projection plus
/// enrolled tests with club projections and engaged domains.
///
/// # Endpoint
///
/// `POST /api/students/dashboard`
///
/// # Errors
///
/// Returns 404 for an unknown student; store failures answer 500 with a
/// generic message.
pub async fn student_dashboard_handler(
    State(state): State<AppState>,
    Json(payload): Json<DashboardRequest>,
) -> Result<Json<DashboardResponse>, AppError> {
    let dashboard = state.student_service.dashboard(payload.student_id).await?;

    Ok(Json(dashboard.into()))
}

/// Fetches contact projections for a list of students, preserving input
/// order; unresolved ids yield `null` placeholders.
///
/// # Endpoint
///
/// `POST /api/students/batch`
pub async fn student_batch_handler(
    State(state): State<AppState>,
    Json(payload): Json<StudentBatchRequest>,
) -> Result<Json<StudentBatchResponse>, AppError> {
    let contacts = state
        .student_service
        .batch_contacts(payload.student_ids)
        .await;

    Ok(Json(StudentBatchResponse {
        students: contacts
            .into_iter()
            .map(|contact| contact.map(StudentContactItem::from))
            .collect(),
    }))
}

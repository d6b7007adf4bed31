//! Handlers for domain endpoints and the bulk finished-set cleanup.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde_json::json;

use crate::api::dto::domain::{
    ClearEntriesRequest, ClearEntriesResponse, ClearEntryOutcome, CompletionItem, DomainDetail,
    DomainFindQuery, DomainItem, DomainListResponse, DomainsQuery,
};
use crate::api::middleware::auth::AuthClub;
use crate::error::AppError;
use crate::state::AppState;

/// Lists domains of a test.
///
/// # Endpoint
///
/// `GET /api/domains?testId={id}`
pub async fn domain_list_handler(
    State(state): State<AppState>,
    Query(query): Query<DomainsQuery>,
) -> Result<Json<DomainListResponse>, AppError> {
    let domains = state.domain_service.list_domains(query.test_id).await?;

    Ok(Json(DomainListResponse {
        domains: domains.into_iter().map(DomainItem::from).collect(),
    }))
}

/// Fetches a single domain by id, with its finished-students set; unknown
/// ids answer with JSON `null`.
///
/// # Endpoint
///
/// `GET /api/domains/find?domainId={id}`
///
/// # Errors
///
/// Returns 400 when `domainId` is missing.
pub async fn domain_find_handler(
    State(state): State<AppState>,
    Query(query): Query<DomainFindQuery>,
) -> Result<Json<Option<DomainDetail>>, AppError> {
    let domain_id = query.domain_id.ok_or_else(|| {
        AppError::bad_request(
            "1 or more parameter(s) missing from request query",
            json!({"missing": ["domainId"]}),
        )
    })?;

    let detail = state.domain_service.get_domain(domain_id).await?;

    Ok(Json(detail.map(|(domain, completions)| DomainDetail {
        domain: domain.into(),
        users_finished: completions.into_iter().map(CompletionItem::from).collect(),
    })))
}

/// Removes the listed students from a domain's finished set and from their
/// own per-test domain lists.
///
/// # Endpoint
///
/// `POST /api/domains/clear-entries`
///
/// Responds 200 `"Done"` regardless of per-item failures; individual
/// outcomes are reported in `results`.
pub async fn clear_entries_handler(
    State(state): State<AppState>,
    principal: Option<Extension<AuthClub>>,
    Json(payload): Json<ClearEntriesRequest>,
) -> Result<Json<ClearEntriesResponse>, AppError> {
    tracing::info!(
        club_id = principal.as_ref().map(|p| p.0.id),
        domain_id = payload.domain_id,
        test_id = payload.test_id,
        students = payload.student_ids.len(),
        "clearing domain entries"
    );

    let outcomes = state
        .domain_service
        .clear_entries(payload.domain_id, payload.test_id, payload.student_ids)
        .await;

    Ok(Json(ClearEntriesResponse {
        message: "Done",
        results: outcomes.into_iter().map(ClearEntryOutcome::from).collect(),
    }))
}

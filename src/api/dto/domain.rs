//! DTOs for domain listings and the bulk finished-set cleanup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::services::ClearOutcome;
use crate::domain::entities::{Domain, DomainCompletion};

/// Query parameters for domain listings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainsQuery {
    pub test_id: Option<i64>,
}

/// Query parameters for the single-domain lookup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainFindQuery {
    pub domain_id: Option<i64>,
}

/// A domain of a test.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainItem {
    pub id: i64,
    pub test_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub duration_minutes: i32,
    pub status: String,
}

impl From<Domain> for DomainItem {
    fn from(domain: Domain) -> Self {
        Self {
            id: domain.id,
            test_id: domain.test_id,
            name: domain.name,
            description: domain.description,
            instructions: domain.instructions,
            duration_minutes: domain.duration_minutes,
            status: domain.status,
        }
    }
}

/// Response for domain listings.
#[derive(Debug, Serialize)]
pub struct DomainListResponse {
    pub domains: Vec<DomainItem>,
}

/// Entry in a domain's finished-students set.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    pub student_id: i64,
    pub finished_at: DateTime<Utc>,
}

impl From<DomainCompletion> for CompletionItem {
    fn from(completion: DomainCompletion) -> Self {
        Self {
            student_id: completion.student_id,
            finished_at: completion.finished_at,
        }
    }
}

/// Single-domain detail: the domain plus its finished-students set.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainDetail {
    #[serde(flatten)]
    pub domain: DomainItem,
    pub users_finished: Vec<CompletionItem>,
}

/// Request body for the bulk finished-set cleanup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearEntriesRequest {
    pub domain_id: i64,
    pub test_id: i64,
    pub student_ids: Vec<i64>,
}

/// Per-student outcome of a bulk-clear run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearEntryOutcome {
    pub student_id: i64,
    pub domain_side_ok: bool,
    pub student_side_ok: bool,
}

impl From<ClearOutcome> for ClearEntryOutcome {
    fn from(outcome: ClearOutcome) -> Self {
        Self {
            student_id: outcome.student_id,
            domain_side_ok: outcome.domain_side_ok,
            student_side_ok: outcome.student_side_ok,
        }
    }
}

/// Response for the bulk finished-set cleanup. Always `"Done"`; per-item
/// failures are visible in `results`, not in the status code.
#[derive(Debug, Serialize)]
pub struct ClearEntriesResponse {
    pub message: &'static str,
    pub results: Vec<ClearEntryOutcome>,
}

//! Domain entity: a sub-category/round within a test.

use chrono::{DateTime, Utc};

/// A domain of a test that students engage with.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Domain {
    pub id: i64,
    pub test_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub duration_minutes: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Entry in a domain's finished-students set.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DomainCompletion {
    pub domain_id: i64,
    pub student_id: i64,
    pub finished_at: DateTime<Utc>,
}

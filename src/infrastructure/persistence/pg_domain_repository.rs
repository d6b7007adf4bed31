//! PostgreSQL implementation of domain repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Domain, DomainCompletion};
use crate::domain::repositories::DomainRepository;
use crate::error::AppError;

/// PostgreSQL repository for test domains and their finished-students set.
pub struct PgDomainRepository {
    pool: Arc<PgPool>,
}

impl PgDomainRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct EngagedDomainRow {
    enrolled_test_id: i64,
    #[sqlx(flatten)]
    domain: Domain,
}

#[async_trait]
impl DomainRepository for PgDomainRepository {
    async fn list(&self, test_id: Option<i64>) -> Result<Vec<Domain>, AppError> {
        let domains = sqlx::query_as::<_, Domain>(
            r#"
            SELECT id, test_id, name, description, instructions, duration_minutes,
                   status, created_at
            FROM domains
            WHERE ($1::bigint IS NULL OR test_id = $1)
            ORDER BY id
            "#,
        )
        .bind(test_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(domains)
    }

    async fn find_by_id(&self, domain_id: i64) -> Result<Option<Domain>, AppError> {
        let domain = sqlx::query_as::<_, Domain>(
            r#"
            SELECT id, test_id, name, description, instructions, duration_minutes,
                   status, created_at
            FROM domains
            WHERE id = $1
            "#,
        )
        .bind(domain_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(domain)
    }

    async fn list_completions(&self, domain_id: i64) -> Result<Vec<DomainCompletion>, AppError> {
        let completions = sqlx::query_as::<_, DomainCompletion>(
            r#"
            SELECT domain_id, student_id, finished_at
            FROM domain_completions
            WHERE domain_id = $1
            ORDER BY finished_at
            "#,
        )
        .bind(domain_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(completions)
    }

    async fn remove_completion(&self, domain_id: i64, student_id: i64) -> Result<u64, AppError> {
        let result = sqlx::query(
            "DELETE FROM domain_completions WHERE domain_id = $1 AND student_id = $2",
        )
        .bind(domain_id)
        .bind(student_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn list_engaged(&self, student_id: i64) -> Result<Vec<(i64, Domain)>, AppError> {
        let rows = sqlx::query_as::<_, EngagedDomainRow>(
            r#"
            SELECT sd.test_id AS enrolled_test_id,
                   d.id, d.test_id, d.name, d.description, d.instructions,
                   d.duration_minutes, d.status, d.created_at
            FROM student_test_domains sd
            JOIN domains d ON d.id = sd.domain_id
            WHERE sd.student_id = $1
            ORDER BY sd.test_id, d.id
            "#,
        )
        .bind(student_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| (r.enrolled_test_id, r.domain))
            .collect())
    }
}

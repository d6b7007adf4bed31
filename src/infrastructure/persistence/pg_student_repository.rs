//! PostgreSQL implementation of student repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Student, StudentContact};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;

/// Public column list for student reads. Credentials and verification
/// codes are never selected.
const STUDENT_COLUMNS: &str =
    "id, name, email, mobile_number, bio, branch, registration_number, created_at";

/// PostgreSQL repository for student storage and retrieval.
pub struct PgStudentRepository {
    pool: Arc<PgPool>,
}

impl PgStudentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(student)
    }

    async fn find_contact(&self, id: i64) -> Result<Option<StudentContact>, AppError> {
        let contact = sqlx::query_as::<_, StudentContact>(
            "SELECT id, name, email, mobile_number FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(contact)
    }

    async fn find_or_create_by_email(
        &self,
        name: &str,
        email: &str,
    ) -> Result<Student, AppError> {
        // The no-op conflict update makes RETURNING yield the existing row.
        let student = sqlx::query_as::<_, Student>(&format!(
            "INSERT INTO students (name, email, email_verified) \
             VALUES ($1, $2, TRUE) \
             ON CONFLICT (email) DO UPDATE SET email = EXCLUDED.email \
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(name)
        .bind(email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(student)
    }

    async fn remove_domain_engagement(
        &self,
        student_id: i64,
        test_id: i64,
        domain_id: i64,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            "DELETE FROM student_test_domains \
             WHERE student_id = $1 AND test_id = $2 AND domain_id = $3",
        )
        .bind(student_id)
        .bind(test_id)
        .bind(domain_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }
}

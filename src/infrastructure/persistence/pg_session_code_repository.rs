//! PostgreSQL implementation of session-code repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewSessionCode, SessionCode};
use crate::domain::repositories::SessionCodeRepository;
use crate::error::AppError;

/// PostgreSQL repository for one-time login exchange codes.
///
/// Stores HMAC-hashed codes; raw codes are never persisted.
pub struct PgSessionCodeRepository {
    pool: Arc<PgPool>,
}

impl PgSessionCodeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionCodeRepository for PgSessionCodeRepository {
    async fn create(&self, new_code: NewSessionCode) -> Result<SessionCode, AppError> {
        let code = sqlx::query_as::<_, SessionCode>(
            r#"
            INSERT INTO session_codes (code_hash, principal_name, token, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, code_hash, principal_name, token, expires_at,
                      consumed_at, created_at
            "#,
        )
        .bind(new_code.code_hash)
        .bind(new_code.principal_name)
        .bind(new_code.token)
        .bind(new_code.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(code)
    }

    async fn consume(&self, code_hash: &str) -> Result<Option<SessionCode>, AppError> {
        // Single-use guarantee: the conditional UPDATE either claims the code
        // or matches nothing.
        let code = sqlx::query_as::<_, SessionCode>(
            r#"
            UPDATE session_codes
            SET consumed_at = NOW()
            WHERE code_hash = $1
              AND consumed_at IS NULL
              AND expires_at > NOW()
            RETURNING id, code_hash, principal_name, token, expires_at,
                      consumed_at, created_at
            "#,
        )
        .bind(code_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(code)
    }
}

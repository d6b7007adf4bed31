//! PostgreSQL implementation of club repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Club, NewClub};
use crate::domain::repositories::ClubRepository;
use crate::error::AppError;

/// Column list for club reads. The credential column is deliberately not
/// part of it.
const CLUB_COLUMNS: &str = "id, name, email, username, bio, website, mobile_number, \
     avatar_url, banner_url, redirect_url, tier, featured, tests_published, created_at";

/// PostgreSQL repository for club storage and retrieval.
pub struct PgClubRepository {
    pool: Arc<PgPool>,
}

impl PgClubRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubRepository for PgClubRepository {
    async fn list(&self) -> Result<Vec<Club>, AppError> {
        let clubs = sqlx::query_as::<_, Club>(&format!(
            "SELECT {CLUB_COLUMNS} FROM clubs ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(clubs)
    }

    async fn list_featured(&self) -> Result<Vec<Club>, AppError> {
        let clubs = sqlx::query_as::<_, Club>(&format!(
            "SELECT {CLUB_COLUMNS} FROM clubs WHERE featured ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(clubs)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Club>, AppError> {
        let club = sqlx::query_as::<_, Club>(&format!(
            "SELECT {CLUB_COLUMNS} FROM clubs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(club)
    }

    async fn create(&self, new_club: NewClub) -> Result<Club, AppError> {
        let club = sqlx::query_as::<_, Club>(&format!(
            "INSERT INTO clubs (name, email, password_hash, tier, featured) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {CLUB_COLUMNS}"
        ))
        .bind(new_club.name)
        .bind(new_club.email)
        .bind(new_club.password_hash)
        .bind(new_club.tier)
        .bind(new_club.featured)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(club)
    }
}

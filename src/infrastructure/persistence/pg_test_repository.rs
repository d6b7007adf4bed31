//! PostgreSQL implementation of test repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ClubCard, ClubTier, EnrolledTest, Test, TestWithClub};
use crate::domain::repositories::TestRepository;
use crate::error::AppError;

/// PostgreSQL repository for recruitment tests.
pub struct PgTestRepository {
    pool: Arc<PgPool>,
}

impl PgTestRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TestWithClubRow {
    #[sqlx(flatten)]
    test: Test,
    club_name: String,
    club_email: String,
}

#[derive(sqlx::FromRow)]
struct EnrolledTestRow {
    #[sqlx(flatten)]
    test: Test,
    club_name: String,
    club_email: String,
    club_bio: Option<String>,
    club_tier: ClubTier,
    club_website: Option<String>,
    club_avatar_url: Option<String>,
    club_banner_url: Option<String>,
    club_redirect_url: Option<String>,
}

impl From<EnrolledTestRow> for EnrolledTest {
    fn from(row: EnrolledTestRow) -> Self {
        let club = ClubCard {
            id: row.test.club_id,
            name: row.club_name,
            email: row.club_email,
            bio: row.club_bio,
            tier: row.club_tier,
            website: row.club_website,
            avatar_url: row.club_avatar_url,
            banner_url: row.club_banner_url,
            redirect_url: row.club_redirect_url,
        };
        EnrolledTest {
            test: row.test,
            club,
        }
    }
}

#[async_trait]
impl TestRepository for PgTestRepository {
    async fn list_with_club(&self, club_id: Option<i64>) -> Result<Vec<TestWithClub>, AppError> {
        let rows = sqlx::query_as::<_, TestWithClubRow>(
            r#"
            SELECT t.id, t.club_id, t.title, t.published, t.scheduled_start,
                   t.scheduled_end, t.round_number, t.round_type, t.instructions,
                   t.graded, t.created_at,
                   c.name AS club_name, c.email AS club_email
            FROM tests t
            JOIN clubs c ON c.id = t.club_id
            WHERE ($1::bigint IS NULL OR t.club_id = $1)
            ORDER BY t.id
            "#,
        )
        .bind(club_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| TestWithClub {
                test: r.test,
                club_name: r.club_name,
                club_email: r.club_email,
            })
            .collect())
    }

    async fn list_published_by_club(&self, club_id: i64) -> Result<Vec<Test>, AppError> {
        let tests = sqlx::query_as::<_, Test>(
            r#"
            SELECT id, club_id, title, published, scheduled_start, scheduled_end,
                   round_number, round_type, instructions, graded, created_at
            FROM tests
            WHERE club_id = $1 AND published
            ORDER BY id
            "#,
        )
        .bind(club_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(tests)
    }

    async fn list_enrolled(&self, student_id: i64) -> Result<Vec<EnrolledTest>, AppError> {
        let rows = sqlx::query_as::<_, EnrolledTestRow>(
            r#"
            SELECT t.id, t.club_id, t.title, t.published, t.scheduled_start,
                   t.scheduled_end, t.round_number, t.round_type, t.instructions,
                   t.graded, t.created_at,
                   c.name AS club_name, c.email AS club_email, c.bio AS club_bio,
                   c.tier AS club_tier, c.website AS club_website,
                   c.avatar_url AS club_avatar_url, c.banner_url AS club_banner_url,
                   c.redirect_url AS club_redirect_url
            FROM student_tests st
            JOIN tests t ON t.id = st.test_id
            JOIN clubs c ON c.id = t.club_id
            WHERE st.student_id = $1
            ORDER BY st.enrolled_at, t.id
            "#,
        )
        .bind(student_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(EnrolledTest::from).collect())
    }
}

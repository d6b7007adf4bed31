//! Repository trait for test data access.

use crate::domain::entities::{EnrolledTest, Test, TestWithClub};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recruitment tests.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTestRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TestRepository: Send + Sync {
    /// Lists tests with the owning club's name and email joined in.
    ///
    /// `club_id: None` drops the filter and lists all tests.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_with_club(&self, club_id: Option<i64>) -> Result<Vec<TestWithClub>, AppError>;

    /// Lists published tests of one club.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_published_by_club(&self, club_id: i64) -> Result<Vec<Test>, AppError>;

    /// Lists the tests a student is enrolled in, each with the owning
    /// club's dashboard projection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_enrolled(&self, student_id: i64) -> Result<Vec<EnrolledTest>, AppError>;
}

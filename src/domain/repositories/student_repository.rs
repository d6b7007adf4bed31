//! Repository trait for student data access.

use crate::domain::entities::{Student, StudentContact};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for student records.
///
/// Read methods select only public columns; verification codes and
/// credentials never cross this boundary.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStudentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Finds a student by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;

    /// Fetches the contact projection (name, email, mobile) for one student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_contact(&self, id: i64) -> Result<Option<StudentContact>, AppError>;

    /// Finds a student by email, creating a minimal record when absent.
    ///
    /// Used by the OAuth login flow; provider-asserted emails are treated
    /// as verified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_or_create_by_email(
        &self,
        name: &str,
        email: &str,
    ) -> Result<Student, AppError>;

    /// Removes a domain reference from a student's per-test domain list.
    ///
    /// Returns the number of entries removed. An absent reference removes 0
    /// entries and is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn remove_domain_engagement(
        &self,
        student_id: i64,
        test_id: i64,
        domain_id: i64,
    ) -> Result<u64, AppError>;
}

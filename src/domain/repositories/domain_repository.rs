//! Repository trait for test-domain data access.

use crate::domain::entities::{Domain, DomainCompletion};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for domains and their finished-students set.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDomainRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// Lists domains, optionally filtered to one test.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, test_id: Option<i64>) -> Result<Vec<Domain>, AppError>;

    /// Finds a domain by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, domain_id: i64) -> Result<Option<Domain>, AppError>;

    /// Lists a domain's finished-students set, oldest completion first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_completions(&self, domain_id: i64) -> Result<Vec<DomainCompletion>, AppError>;

    /// Removes a student from a domain's finished set.
    ///
    /// Returns the number of entries removed. A student absent from the set
    /// removes 0 entries and is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn remove_completion(&self, domain_id: i64, student_id: i64) -> Result<u64, AppError>;

    /// Lists the domains a student is engaged in, keyed by test id, across
    /// all enrollments. One query; the caller groups by test.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_engaged(&self, student_id: i64) -> Result<Vec<(i64, Domain)>, AppError>;
}

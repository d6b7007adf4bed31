//! Repository trait for club data access.

use crate::domain::entities::{Club, NewClub};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for club records.
///
/// Clubs are provisioned out-of-band (see the `admin` binary); the HTTP
/// surface only reads them. Read methods never select the credential column.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClubRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// Lists every club, credentials excluded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Club>, AppError>;

    /// Lists clubs with the featured flag set, in store order.
    ///
    /// Tier re-ordering is business logic and happens in the service layer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_featured(&self) -> Result<Vec<Club>, AppError>;

    /// Finds a club by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Club>, AppError>;

    /// Creates a club record. Used by the provisioning CLI only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including unique
    /// violations on the club email.
    async fn create(&self, new_club: NewClub) -> Result<Club, AppError>;
}

//! Repository trait for one-time login exchange codes.

use crate::domain::entities::{NewSessionCode, SessionCode};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for session exchange codes.
///
/// Codes arrive here already hashed; the raw value is never persisted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSessionCodeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionCodeRepository: Send + Sync {
    /// Stores a freshly issued exchange code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_code: NewSessionCode) -> Result<SessionCode, AppError>;

    /// Atomically consumes an unexpired, unconsumed code by hash.
    ///
    /// Returns `Ok(None)` when the hash is unknown, expired, or already
    /// consumed; the caller cannot distinguish the three cases.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn consume(&self, code_hash: &str) -> Result<Option<SessionCode>, AppError>;
}

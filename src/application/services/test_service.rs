//! Test listing service.

use std::sync::Arc;

use crate::domain::entities::{Test, TestWithClub};
use crate::domain::repositories::TestRepository;
use crate::error::AppError;

/// Service for recruitment test reads.
pub struct TestService {
    tests: Arc<dyn TestRepository>,
}

impl TestService {
    /// Creates a new test service.
    pub fn new(tests: Arc<dyn TestRepository>) -> Self {
        Self { tests }
    }

    /// Lists tests with club contact fields joined in.
    ///
    /// Without a club filter, every test is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn list_tests(&self, club_id: Option<i64>) -> Result<Vec<TestWithClub>, AppError> {
        self.tests.list_with_club(club_id).await
    }

    /// Lists published tests of one club.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn list_published_tests(&self, club_id: i64) -> Result<Vec<Test>, AppError> {
        self.tests.list_published_by_club(club_id).await
    }
}

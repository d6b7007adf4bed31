//! Student dashboard assembly and batch contact lookup.

use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{ClubCard, Domain, Student, StudentContact, Test};
use crate::domain::repositories::{DomainRepository, StudentRepository, TestRepository};
use crate::error::AppError;
use serde_json::json;

/// One enrolled test on the dashboard: the test, its owning club's
/// projection, and the domains the student is engaged in for it.
#[derive(Debug, Clone)]
pub struct DashboardTest {
    pub test: Test,
    pub club: ClubCard,
    pub domains: Vec<Domain>,
}

/// Assembled dashboard: identity projection plus the joined tests array.
#[derive(Debug, Clone)]
pub struct StudentDashboard {
    pub student: Student,
    pub tests: Vec<DashboardTest>,
}

/// Service for aggregated student reads.
pub struct StudentService {
    students: Arc<dyn StudentRepository>,
    tests: Arc<dyn TestRepository>,
    domains: Arc<dyn DomainRepository>,
    concurrency: usize,
}

impl StudentService {
    /// Creates a new student service.
    ///
    /// `concurrency` bounds the fan-out of the batch contact lookup.
    pub fn new(
        students: Arc<dyn StudentRepository>,
        tests: Arc<dyn TestRepository>,
        domains: Arc<dyn DomainRepository>,
        concurrency: usize,
    ) -> Self {
        Self {
            students,
            tests,
            domains,
            concurrency: concurrency.max(1),
        }
    }

    /// Assembles the dashboard for one student.
    ///
    /// Enrollments and engaged domains are fetched concurrently once the
    /// student is known to exist; engaged domains are grouped under their
    /// enrolled test.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown student and
    /// [`AppError::Internal`] on store failures.
    pub async fn dashboard(&self, student_id: i64) -> Result<StudentDashboard, AppError> {
        let student = self
            .students
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Student not found", json!({"studentId": student_id}))
            })?;

        let (enrolled, engaged) = tokio::try_join!(
            self.tests.list_enrolled(student_id),
            self.domains.list_engaged(student_id)
        )?;

        let mut domains_by_test: HashMap<i64, Vec<Domain>> = HashMap::new();
        for (test_id, domain) in engaged {
            domains_by_test.entry(test_id).or_default().push(domain);
        }

        let tests = enrolled
            .into_iter()
            .map(|entry| DashboardTest {
                domains: domains_by_test.remove(&entry.test.id).unwrap_or_default(),
                test: entry.test,
                club: entry.club,
            })
            .collect();

        Ok(StudentDashboard { student, tests })
    }

    /// Fetches contact projections for a list of students.
    ///
    /// The result preserves input order; an unknown id or a per-item store
    /// failure yields `None` at that position instead of aborting the batch
    /// (failures are logged).
    pub async fn batch_contacts(&self, student_ids: Vec<i64>) -> Vec<Option<StudentContact>> {
        stream::iter(student_ids)
            .map(|student_id| {
                let students = Arc::clone(&self.students);
                async move {
                    match students.find_contact(student_id).await {
                        Ok(contact) => contact,
                        Err(e) => {
                            tracing::warn!(
                                student_id,
                                error = %e,
                                "failed to fetch student in batch lookup"
                            );
                            None
                        }
                    }
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await
    }
}

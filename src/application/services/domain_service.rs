//! Domain reads and the bulk finished-set cleanup.

use futures::stream::{self, StreamExt};
use std::sync::Arc;

use crate::domain::entities::{Domain, DomainCompletion};
use crate::domain::repositories::{DomainRepository, StudentRepository};
use crate::error::AppError;

/// Per-student outcome of a bulk-clear run.
///
/// Both relation sides are attempted independently; a `false` means that
/// side's write failed at the store (not that there was nothing to remove).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearOutcome {
    pub student_id: i64,
    pub domain_side_ok: bool,
    pub student_side_ok: bool,
}

/// Service for test domains and their two-sided student relation.
pub struct DomainService {
    domains: Arc<dyn DomainRepository>,
    students: Arc<dyn StudentRepository>,
    concurrency: usize,
}

impl DomainService {
    /// Creates a new domain service.
    ///
    /// `concurrency` bounds the fan-out of bulk operations.
    pub fn new(
        domains: Arc<dyn DomainRepository>,
        students: Arc<dyn StudentRepository>,
        concurrency: usize,
    ) -> Self {
        Self {
            domains,
            students,
            concurrency: concurrency.max(1),
        }
    }

    /// Lists domains, optionally filtered to one test.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn list_domains(&self, test_id: Option<i64>) -> Result<Vec<Domain>, AppError> {
        self.domains.list(test_id).await
    }

    /// Finds one domain by id, with its finished-students set. `Ok(None)`
    /// when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn get_domain(
        &self,
        domain_id: i64,
    ) -> Result<Option<(Domain, Vec<DomainCompletion>)>, AppError> {
        let Some(domain) = self.domains.find_by_id(domain_id).await? else {
            return Ok(None);
        };

        let completions = self.domains.list_completions(domain_id).await?;

        Ok(Some((domain, completions)))
    }

    /// Removes each listed student from the domain's finished set and drops
    /// the matching domain reference from the student's per-test list.
    ///
    /// The two writes per student are deliberately independent: one side
    /// failing never suppresses the attempt on the other, and one student's
    /// failure never aborts the rest of the batch. Outcomes are collected
    /// per item; failures are logged with their store detail.
    pub async fn clear_entries(
        &self,
        domain_id: i64,
        test_id: i64,
        student_ids: Vec<i64>,
    ) -> Vec<ClearOutcome> {
        stream::iter(student_ids)
            .map(|student_id| {
                let domains = Arc::clone(&self.domains);
                let students = Arc::clone(&self.students);
                async move {
                    let domain_side = domains.remove_completion(domain_id, student_id).await;
                    if let Err(e) = &domain_side {
                        tracing::warn!(
                            domain_id,
                            student_id,
                            error = %e,
                            "failed to remove student from finished set"
                        );
                    }

                    let student_side = students
                        .remove_domain_engagement(student_id, test_id, domain_id)
                        .await;
                    if let Err(e) = &student_side {
                        tracing::warn!(
                            domain_id,
                            test_id,
                            student_id,
                            error = %e,
                            "failed to remove domain from student's test entry"
                        );
                    }

                    ClearOutcome {
                        student_id,
                        domain_side_ok: domain_side.is_ok(),
                        student_side_ok: student_side.is_ok(),
                    }
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockDomainRepository, MockStudentRepository};
    use serde_json::json;

    fn store_failure() -> AppError {
        AppError::internal("Something went wrong", json!({}))
    }

    #[tokio::test]
    async fn test_clear_entries_all_succeed() {
        let mut domains = MockDomainRepository::new();
        let mut students = MockStudentRepository::new();

        domains
            .expect_remove_completion()
            .times(3)
            .returning(|_, _| Ok(1));
        students
            .expect_remove_domain_engagement()
            .times(3)
            .returning(|_, _, _| Ok(1));

        let service = DomainService::new(Arc::new(domains), Arc::new(students), 4);

        let outcomes = service.clear_entries(5, 9, vec![1, 2, 3]).await;

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| o.domain_side_ok && o.student_side_ok));
        let ids: Vec<i64> = outcomes.iter().map(|o| o.student_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_clear_entries_continues_past_failures() {
        let mut domains = MockDomainRepository::new();
        let mut students = MockStudentRepository::new();

        // Student 2's finished-set removal fails at the store.
        domains
            .expect_remove_completion()
            .times(3)
            .returning(|_, student_id| {
                if student_id == 2 {
                    Err(store_failure())
                } else {
                    Ok(1)
                }
            });

        // The student-side write is still attempted for all three students.
        students
            .expect_remove_domain_engagement()
            .times(3)
            .returning(|_, _, _| Ok(1));

        let service = DomainService::new(Arc::new(domains), Arc::new(students), 4);

        let outcomes = service.clear_entries(5, 9, vec![1, 2, 3]).await;

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].domain_side_ok && outcomes[0].student_side_ok);
        assert!(!outcomes[1].domain_side_ok);
        assert!(outcomes[1].student_side_ok);
        assert!(outcomes[2].domain_side_ok && outcomes[2].student_side_ok);
    }

    #[tokio::test]
    async fn test_clear_entries_both_sides_can_fail_independently() {
        let mut domains = MockDomainRepository::new();
        let mut students = MockStudentRepository::new();

        domains
            .expect_remove_completion()
            .times(1)
            .returning(|_, _| Err(store_failure()));
        students
            .expect_remove_domain_engagement()
            .times(1)
            .returning(|_, _, _| Err(store_failure()));

        let service = DomainService::new(Arc::new(domains), Arc::new(students), 2);

        let outcomes = service.clear_entries(5, 9, vec![7]).await;

        assert_eq!(
            outcomes,
            vec![ClearOutcome {
                student_id: 7,
                domain_side_ok: false,
                student_side_ok: false,
            }]
        );
    }

    #[tokio::test]
    async fn test_get_domain_missing_is_none() {
        let mut domains = MockDomainRepository::new();
        let students = MockStudentRepository::new();

        domains
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        // No completion lookup for a missing domain.
        domains.expect_list_completions().times(0);

        let service = DomainService::new(Arc::new(domains), Arc::new(students), 2);

        assert!(service.get_domain(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_domain_carries_finished_set() {
        use crate::domain::entities::Domain;
        use chrono::Utc;

        let mut domains = MockDomainRepository::new();
        let students = MockStudentRepository::new();

        domains.expect_find_by_id().times(1).returning(|id| {
            Ok(Some(Domain {
                id,
                test_id: 4,
                name: "Design".to_string(),
                description: None,
                instructions: None,
                duration_minutes: 45,
                status: "Live".to_string(),
                created_at: Utc::now(),
            }))
        });
        domains
            .expect_list_completions()
            .times(1)
            .returning(|domain_id| {
                Ok(vec![DomainCompletion {
                    domain_id,
                    student_id: 9,
                    finished_at: Utc::now(),
                }])
            });

        let service = DomainService::new(Arc::new(domains), Arc::new(students), 2);

        let (domain, completions) = service.get_domain(11).await.unwrap().unwrap();

        assert_eq!(domain.id, 11);
        assert_eq!(completions.len(), 1);
        assert_eq!(completions[0].student_id, 9);
    }
}

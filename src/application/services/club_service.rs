//! Club listing service.

use std::sync::Arc;

use crate::domain::entities::Club;
use crate::domain::repositories::ClubRepository;
use crate::error::AppError;

/// Service for club reads.
pub struct ClubService {
    clubs: Arc<dyn ClubRepository>,
}

impl ClubService {
    /// Creates a new club service.
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    /// Lists every club, credentials excluded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn list_clubs(&self) -> Result<Vec<Club>, AppError> {
        self.clubs.list().await
    }

    /// Lists featured clubs ordered by partnership tier, largest first.
    ///
    /// The sort is stable: within a tier, clubs keep the order the store
    /// returned them in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn list_featured_clubs(&self) -> Result<Vec<Club>, AppError> {
        let mut clubs = self.clubs.list_featured().await?;
        clubs.sort_by_key(|club| club.tier.priority());
        Ok(clubs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ClubTier;
    use crate::domain::repositories::MockClubRepository;
    use chrono::Utc;

    fn club(id: i64, tier: ClubTier) -> Club {
        Club {
            id,
            name: format!("club-{id}"),
            email: format!("club-{id}@university.example"),
            username: None,
            bio: None,
            website: None,
            mobile_number: None,
            avatar_url: None,
            banner_url: None,
            redirect_url: None,
            tier,
            featured: true,
            tests_published: 0,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_featured_clubs_tier_order() {
        let mut repo = MockClubRepository::new();

        repo.expect_list_featured().times(1).returning(|| {
            Ok(vec![
                club(1, ClubTier::Nano),
                club(2, ClubTier::Giga),
                club(3, ClubTier::Micro),
                club(4, ClubTier::Mega),
                club(5, ClubTier::Giga),
            ])
        });

        let service = ClubService::new(Arc::new(repo));

        let clubs = service.list_featured_clubs().await.unwrap();

        let tiers: Vec<ClubTier> = clubs.iter().map(|c| c.tier).collect();
        assert_eq!(
            tiers,
            vec![
                ClubTier::Giga,
                ClubTier::Giga,
                ClubTier::Mega,
                ClubTier::Micro,
                ClubTier::Nano,
            ]
        );
    }

    #[tokio::test]
    async fn test_featured_clubs_stable_within_tier() {
        let mut repo = MockClubRepository::new();

        repo.expect_list_featured().times(1).returning(|| {
            Ok(vec![
                club(10, ClubTier::Giga),
                club(20, ClubTier::Mega),
                club(11, ClubTier::Giga),
                club(21, ClubTier::Mega),
                club(12, ClubTier::Giga),
            ])
        });

        let service = ClubService::new(Arc::new(repo));

        let clubs = service.list_featured_clubs().await.unwrap();

        let ids: Vec<i64> = clubs.iter().map(|c| c.id).collect();
        // Store order preserved inside each tier group.
        assert_eq!(ids, vec![10, 11, 12, 20, 21]);
    }

    #[tokio::test]
    async fn test_list_clubs_propagates_store_failure() {
        let mut repo = MockClubRepository::new();

        repo.expect_list()
            .times(1)
            .returning(|| Err(AppError::internal("Something went wrong", serde_json::json!({}))));

        let service = ClubService::new(Arc::new(repo));

        assert!(service.list_clubs().await.is_err());
    }
}

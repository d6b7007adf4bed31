//! Test entity: a recruitment evaluation owned by a club.

use chrono::{DateTime, Utc};

use crate::domain::entities::ClubCard;

/// A recruitment test.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Test {
    pub id: i64,
    pub club_id: i64,
    pub title: String,
    pub published: bool,
    pub scheduled_start: Option<DateTime<Utc>>,
    pub scheduled_end: Option<DateTime<Utc>>,
    pub round_number: i32,
    pub round_type: Option<String>,
    pub instructions: Option<String>,
    pub graded: bool,
    pub created_at: DateTime<Utc>,
}

/// A test with its owning club's contact fields joined in.
#[derive(Debug, Clone)]
pub struct TestWithClub {
    pub test: Test,
    pub club_name: String,
    pub club_email: String,
}

/// A test enrollment row on the student dashboard: the test, the owning
/// club's projection, and the domains the student is engaged in.
#[derive(Debug, Clone)]
pub struct EnrolledTest {
    pub test: Test,
    pub club: ClubCard,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_test() -> Test {
        Test {
            id: 1,
            club_id: 3,
            title: "Core Recruitment 2026".to_string(),
            published: true,
            scheduled_start: Some(Utc::now()),
            scheduled_end: None,
            round_number: 1,
            round_type: Some("Quiz".to_string()),
            instructions: None,
            graded: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_with_club_carries_contact_fields() {
        let with_club = TestWithClub {
            test: sample_test(),
            club_name: "Robotics Club".to_string(),
            club_email: "robotics@university.example".to_string(),
        };

        assert_eq!(with_club.test.club_id, 3);
        assert_eq!(with_club.club_name, "Robotics Club");
    }
}

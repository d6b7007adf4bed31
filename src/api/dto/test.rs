//! DTOs for test listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Test, TestWithClub};

/// Query parameters for test listings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestsQuery {
    pub club_id: Option<i64>,
}

/// A recruitment test.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestItem {
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
}

impl From<Test> for TestItem {
    fn from(test: Test) -> Self {
        Self {
            id: test.id,
            club_id: test.club_id,
            title: test.title,
            published: test.published,
            scheduled_start: test.scheduled_start,
            scheduled_end: test.scheduled_end,
            round_number: test.round_number,
            round_type: test.round_type,
            instructions: test.instructions,
            graded: test.graded,
        }
    }
}

/// Owning club's contact fields joined into test listings.
#[derive(Debug, Serialize)]
pub struct ClubContact {
    pub name: String,
    pub email: String,
}

/// A test with its owning club's contact fields.
#[derive(Debug, Serialize)]
pub struct TestWithClubItem {
    #[serde(flatten)]
    pub test: TestItem,
    pub club: ClubContact,
}

impl From<TestWithClub> for TestWithClubItem {
    fn from(entry: TestWithClub) -> Self {
        Self {
            test: entry.test.into(),
            club: ClubContact {
                name: entry.club_name,
                email: entry.club_email,
            },
        }
    }
}

/// Response for the tests-of-a-club listing.
#[derive(Debug, Serialize)]
pub struct TestListResponse {
    pub tests: Vec<TestWithClubItem>,
}

/// Response for the published-tests listing.
#[derive(Debug, Serialize)]
pub struct PublishedTestListResponse {
    pub tests: Vec<TestItem>,
}

//! DTOs for the student dashboard and batch contact lookup.

use serde::{Deserialize, Serialize};

use crate::api::dto::domain::DomainItem;
use crate::api::dto::test::TestItem;
use crate::application::services::{DashboardTest, StudentDashboard};
use crate::domain::entities::{ClubCard, ClubTier, Student, StudentContact};

/// Request body for the dashboard read.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRequest {
    pub student_id: i64,
}

/// Identity projection of a student. This is the complete field set a
/// dashboard response may carry; credentials and verification state have no
/// representation here.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetails {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile_number: Option<String>,
    pub bio: Option<String>,
    pub branch: Option<String>,
    pub registration_number: Option<String>,
}

impl From<Student> for StudentDetails {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            email: student.email,
            mobile_number: student.mobile_number,
            bio: student.bio,
            branch: student.branch,
            registration_number: student.registration_number,
        }
    }
}

/// Owning-club projection on the dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubCardItem {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub tier: ClubTier,
    pub website: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub redirect_url: Option<String>,
}

impl From<ClubCard> for ClubCardItem {
    fn from(card: ClubCard) -> Self {
        Self {
            id: card.id,
            name: card.name,
            email: card.email,
            bio: card.bio,
            tier: card.tier,
            website: card.website,
            avatar_url: card.avatar_url,
            banner_url: card.banner_url,
            redirect_url: card.redirect_url,
        }
    }
}

/// One enrolled test with its club projection and engaged domains.
#[derive(Debug, Serialize)]
pub struct DashboardTestItem {
    pub test: TestItem,
    pub club: ClubCardItem,
    pub domains: Vec<DomainItem>,
}

impl From<DashboardTest> for DashboardTestItem {
    fn from(entry: DashboardTest) -> Self {
        Self {
            test: entry.test.into(),
            club: entry.club.into(),
            domains: entry.domains.into_iter().map(DomainItem::from).collect(),
        }
    }
}

/// Dashboard response: identity projection plus the joined tests array.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub student_details: StudentDetails,
    pub tests: Vec<DashboardTestItem>,
}

impl From<StudentDashboard> for DashboardResponse {
    fn from(dashboard: StudentDashboard) -> Self {
        Self {
            student_details: dashboard.student.into(),
            tests: dashboard
                .tests
                .into_iter()
                .map(DashboardTestItem::from)
                .collect(),
        }
    }
}

/// Request body for the batch contact lookup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentBatchRequest {
    pub student_ids: Vec<i64>,
}

/// Contact projection of a student.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentContactItem {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile_number: Option<String>,
}

impl From<StudentContact> for StudentContactItem {
    fn from(contact: StudentContact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            email: contact.email,
            mobile_number: contact.mobile_number,
        }
    }
}

/// Batch lookup response. Entries are positional: `null` marks an id that
/// could not be resolved.
#[derive(Debug, Serialize)]
pub struct StudentBatchResponse {
    pub students: Vec<Option<StudentContactItem>>,
}

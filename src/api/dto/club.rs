//! DTOs for club listings.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Club, ClubTier};

/// Full public projection of a club. Credentials are excluded at the
/// repository level and have no field here.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubItem {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub mobile_number: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub redirect_url: Option<String>,
    pub tier: ClubTier,
    pub featured: bool,
    pub tests_published: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Club> for ClubItem {
    fn from(club: Club) -> Self {
        Self {
            id: club.id,
            name: club.name,
            email: club.email,
            username: club.username,
            bio: club.bio,
            website: club.website,
            mobile_number: club.mobile_number,
            avatar_url: club.avatar_url,
            banner_url: club.banner_url,
            redirect_url: club.redirect_url,
            tier: club.tier,
            featured: club.featured,
            tests_published: club.tests_published,
            created_at: club.created_at,
        }
    }
}

/// Response containing all clubs.
#[derive(Debug, Serialize)]
pub struct ClubListResponse {
    pub clubs: Vec<ClubItem>,
}

/// Fixed projection for the featured listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedClubItem {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub tier: ClubTier,
    pub bio: Option<String>,
    pub featured: bool,
    pub website: Option<String>,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub mobile_number: Option<String>,
    pub redirect_url: Option<String>,
    pub tests_published: i32,
}

impl From<Club> for FeaturedClubItem {
    fn from(club: Club) -> Self {
        Self {
            id: club.id,
            name: club.name,
            email: club.email,
            tier: club.tier,
            bio: club.bio,
            featured: club.featured,
            website: club.website,
            username: club.username,
            avatar_url: club.avatar_url,
            banner_url: club.banner_url,
            mobile_number: club.mobile_number,
            redirect_url: club.redirect_url,
            tests_published: club.tests_published,
        }
    }
}

/// Response containing featured clubs in tier order.
#[derive(Debug, Serialize)]
pub struct FeaturedClubListResponse {
    pub clubs: Vec<FeaturedClubItem>,
}

//! Club entity: an organization that authors and publishes tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Partnership tier of a club.
///
/// Featured listings are ordered by tier, largest partners first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "club_tier")]
pub enum ClubTier {
    Nano,
    Micro,
    Mega,
    Giga,
}

impl ClubTier {
    /// Sort key for featured listings: Giga first, Nano last.
    pub fn priority(self) -> u8 {
        match self {
            ClubTier::Giga => 0,
            ClubTier::Mega => 1,
            ClubTier::Micro => 2,
            ClubTier::Nano => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClubTier::Nano => "Nano",
            ClubTier::Micro => "Micro",
            ClubTier::Mega => "Mega",
            ClubTier::Giga => "Giga",
        }
    }
}

impl std::str::FromStr for ClubTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Nano" => Ok(ClubTier::Nano),
            "Micro" => Ok(ClubTier::Micro),
            "Mega" => Ok(ClubTier::Mega),
            "Giga" => Ok(ClubTier::Giga),
            other => Err(format!("unknown club tier: {other}")),
        }
    }
}

/// A club as read by the API.
///
/// The credential column is excluded at the SELECT level, so it can never
/// leak through serialization of this type.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Club {
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

/// Input data for provisioning a club out-of-band.
#[derive(Debug, Clone)]
pub struct NewClub {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub tier: ClubTier,
    pub featured: bool,
}

/// Owning-club projection joined into test listings and the student
/// dashboard.
#[derive(Debug, Clone)]
pub struct ClubCard {
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

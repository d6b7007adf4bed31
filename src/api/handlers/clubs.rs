//! Handlers for club listing endpoints.

use axum::{extract::State, Json};

use crate::api::dto::club::{
    ClubItem, ClubListResponse, FeaturedClubItem, FeaturedClubListResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all clubs, credentials excluded.
///
/// # Endpoint
///
/// `GET /api/clubs`
pub async fn club_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ClubListResponse>, AppError> {
    let clubs = state.club_service.list_clubs().await?;

    Ok(Json(ClubListResponse {
        clubs: clubs.into_iter().map(ClubItem::from).collect(),
    }))
}

/// Lists featured clubs, largest partnership tier first.
///
/// # Endpoint
///
/// `GET /api/clubs/featured`
pub async fn featured_club_list_handler(
    State(state): State<AppState>,
) -> Result<Json<FeaturedClubListResponse>, AppError> {
    let clubs = state.club_service.list_featured_clubs().await?;

    Ok(Json(FeaturedClubListResponse {
        clubs: clubs.into_iter().map(FeaturedClubItem::from).collect(),
    }))
}

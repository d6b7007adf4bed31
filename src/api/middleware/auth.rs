//! JWT authentication guard for club-scoped routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::application::services::{JwtCodec, UserType};
use crate::error::AppError;

/// Authenticated club principal attached to guarded requests.
#[derive(Debug, Clone)]
pub struct AuthClub {
    pub id: i64,
    pub name: String,
}

/// Gate for club-scoped routes.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Rejections
///
/// - `401` when the Authorization header is missing or not a bearer token
/// - `400` when the token is malformed, tampered, or expired
/// - `403` when the principal is not a club
///
/// On success the decoded [`AuthClub`] is inserted into request extensions
/// and control passes through unchanged. The codec is injected at router
/// construction; the guard holds no global state.
pub async fn club_guard(
    State(codec): State<JwtCodec>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            metrics::counter!("auth_rejections_total", "reason" => "missing_token").increment(1);
            AppError::unauthorized("Access Denied! No token entered.", json!({}))
        })?;

    let claims = codec.verify(&token).map_err(|e| {
        metrics::counter!("auth_rejections_total", "reason" => "invalid_token").increment(1);
        e
    })?;

    if claims.user_type != UserType::Club {
        metrics::counter!("auth_rejections_total", "reason" => "wrong_principal").increment(1);
        return Err(AppError::forbidden("Not a Club", json!({})));
    }

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(AuthClub {
        id: claims.sub,
        name: claims.name,
    });

    Ok(next.run(req).await)
}

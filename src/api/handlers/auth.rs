//! Handlers for the OAuth login flow.

use axum::{
    extract::{Query, State},
    response::Redirect,
    Json,
};
use url::Url;

use crate::api::dto::auth::{OAuthCallbackQuery, SessionExchangeRequest, SessionExchangeResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Starts the provider login: 303 to the authorize URL with an HMAC-signed
/// anti-forgery state.
///
/// # Endpoint
///
/// `GET /auth/google`
pub async fn oauth_login_handler(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let anti_forgery = state.auth_service.issue_state();
    let authorize_url = state.oauth.authorize_url(&anti_forgery)?;

    Ok(Redirect::to(&authorize_url))
}

/// Completes the provider login and 303s the user agent back to the web
/// application with a one-time exchange code.
///
/// The session token itself never appears in the redirect URL; the code is
/// redeemed server-side via `POST /auth/session`.
///
/// # Endpoint
///
/// `GET /auth/google/callback?code={code}&state={state}`
pub async fn oauth_callback_handler(
    State(state): State<AppState>,
    Query(query): Query<OAuthCallbackQuery>,
) -> Result<Redirect, AppError> {
    state.auth_service.verify_state(&query.state)?;

    let user = state.oauth.exchange_code(&query.code).await?;

    let (name, code) = state.auth_service.complete_login(user).await?;

    let mut target = Url::parse(&state.web_app_url).map_err(|e| {
        tracing::error!(error = %e, "invalid web application URL in configuration");
        AppError::internal("Something went wrong", serde_json::json!({}))
    })?;
    target
        .query_pairs_mut()
        .append_pair("name", &name)
        .append_pair("code", &code);

    Ok(Redirect::to(target.as_str()))
}

/// Redeems a one-time exchange code for the session it wraps.
///
/// # Endpoint
///
/// `POST /auth/session`
///
/// # Errors
///
/// Returns 401 for unknown, expired, or already-consumed codes.
pub async fn session_exchange_handler(
    State(state): State<AppState>,
    Json(payload): Json<SessionExchangeRequest>,
) -> Result<Json<SessionExchangeResponse>, AppError> {
    let login = state.auth_service.redeem_code(&payload.code).await?;

    Ok(Json(SessionExchangeResponse {
        name: login.name,
        token: login.token,
    }))
}

//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`  - Liveness check (public)
//! - `/auth/*`      - OAuth login flow (public)
//! - `/api/*`       - Club-scoped API (JWT guard)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Browser clients on other origins
//! - **Authentication** - Bearer JWT with a `Club` principal
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::application::services::JwtCodec;
use crate::state::AppState;
use axum::routing::get;
use axum::{middleware, Router};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The JWT codec is injected into the guard here; handlers reach tokens
/// only through [`crate::application::services::AuthService`].
pub fn app_router(state: AppState, codec: JwtCodec) -> NormalizePath<Router> {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(codec, auth::club_guard));

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::auth_routes())
        .nest("/api", api_router)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

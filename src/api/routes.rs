//! API route configuration.
//!
//! Club-scoped endpoints are composed here and protected by the JWT guard
//! in [`crate::routes::app_router`].

use crate::api::handlers::{
    clear_entries_handler, club_list_handler, domain_find_handler, domain_list_handler,
    featured_club_list_handler, oauth_callback_handler, oauth_login_handler,
    published_test_list_handler, recruitment_update_handler, session_exchange_handler,
    student_batch_handler, student_dashboard_handler, test_list_handler,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Club-scoped routes, mounted under `/api` behind the JWT guard.
///
/// # Endpoints
///
/// - `GET  /clubs`                               - List all clubs
/// - `GET  /clubs/featured`                      - Featured clubs in tier order
/// - `GET  /tests?clubId=`                       - Tests of a club (club contact joined)
/// - `GET  /tests/published?clubId=`             - Published tests of a club
/// - `GET  /domains?testId=`                     - Domains of a test
/// - `GET  /domains/find?domainId=`              - Single domain or null
/// - `POST /domains/clear-entries`               - Bulk finished-set cleanup
/// - `POST /students/dashboard`                  - Aggregated student dashboard
/// - `POST /students/batch`                      - Batch contact lookup
/// - `POST /notifications/recruitment-update`    - Email dispatch
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/clubs", get(club_list_handler))
        .route("/clubs/featured", get(featured_club_list_handler))
        .route("/tests", get(test_list_handler))
        .route("/tests/published", get(published_test_list_handler))
        .route("/domains", get(domain_list_handler))
        .route("/domains/find", get(domain_find_handler))
        .route("/domains/clear-entries", post(clear_entries_handler))
        .route("/students/dashboard", post(student_dashboard_handler))
        .route("/students/batch", post(student_batch_handler))
        .route(
            "/notifications/recruitment-update",
            post(recruitment_update_handler),
        )
}

/// Public login routes.
///
/// # Endpoints
///
/// - `GET  /auth/google`          - Start the provider login
/// - `GET  /auth/google/callback` - Provider redirect target
/// - `POST /auth/session`         - Redeem a one-time login code
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/google", get(oauth_login_handler))
        .route("/auth/google/callback", get(oauth_callback_handler))
        .route("/auth/session", post(session_exchange_handler))
}

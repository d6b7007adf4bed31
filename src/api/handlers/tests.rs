//! Handlers for test listing endpoints.

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::json;

use crate::api::dto::test::{
    PublishedTestListResponse, TestItem, TestListResponse, TestWithClubItem, TestsQuery,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists tests with owning-club contact fields joined in.
///
/// # Endpoint
///
/// `GET /api/tests?clubId={id}`
///
/// Without `clubId` the filter is dropped and all tests are listed.
pub async fn test_list_handler(
    State(state): State<AppState>,
    Query(query): Query<TestsQuery>,
) -> Result<Json<TestListResponse>, AppError> {
    let tests = state.test_service.list_tests(query.club_id).await?;

    Ok(Json(TestListResponse {
        tests: tests.into_iter().map(TestWithClubItem::from).collect(),
    }))
}

/// Lists published tests of one club.
///
/// # Endpoint
///
/// `GET /api/tests/published?clubId={id}`
///
/// # Errors
///
/// Returns 400 before any store access when `clubId` is missing.
pub async fn published_test_list_handler(
    State(state): State<AppState>,
    Query(query): Query<TestsQuery>,
) -> Result<Json<PublishedTestListResponse>, AppError> {
    let club_id = query.club_id.ok_or_else(|| {
        AppError::bad_request(
            "1 or more parameter(s) missing from request query",
            json!({"missing": ["clubId"]}),
        )
    })?;

    let tests = state.test_service.list_published_tests(club_id).await?;

    Ok(Json(PublishedTestListResponse {
        tests: tests.into_iter().map(TestItem::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Test, TestWithClub};
    use crate::domain::repositories::MockTestRepository;
    use crate::state::test_support::StateBuilder;
    use axum::{routing::get, Router};
    use axum_test::TestServer;
    use chrono::Utc;

    fn sample_test(id: i64, club_id: i64) -> Test {
        Test {
            id,
            club_id,
            title: format!("test-{id}"),
            published: true,
            scheduled_start: None,
            scheduled_end: None,
            round_number: 2,
            round_type: Some("Interview".to_string()),
            instructions: None,
            graded: true,
            created_at: Utc::now(),
        }
    }

    fn make_server(tests: MockTestRepository) -> TestServer {
        let state = StateBuilder::new().tests(tests).build();
        let app = Router::new()
            .route("/api/tests", get(test_list_handler))
            .route("/api/tests/published", get(published_test_list_handler))
            .with_state(state);
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_list_joins_club_contact() {
        let mut repo = MockTestRepository::new();
        repo.expect_list_with_club()
            .withf(|club_id| *club_id == Some(7))
            .times(1)
            .returning(|_| {
                Ok(vec![TestWithClub {
                    test: sample_test(1, 7),
                    club_name: "Robotics Club".to_string(),
                    club_email: "robotics@university.example".to_string(),
                }])
            });

        let server = make_server(repo);

        let response = server.get("/api/tests").add_query_param("clubId", 7).await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["tests"][0]["roundNumber"], 2);
        assert_eq!(body["tests"][0]["club"]["name"], "Robotics Club");
        assert_eq!(body["tests"][0]["club"]["email"], "robotics@university.example");
    }

    #[tokio::test]
    async fn test_list_without_club_id_lists_all() {
        let mut repo = MockTestRepository::new();
        repo.expect_list_with_club()
            .withf(|club_id| club_id.is_none())
            .times(1)
            .returning(|_| Ok(vec![]));

        let server = make_server(repo);

        let response = server.get("/api/tests").await;

        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_published_requires_club_id() {
        let mut repo = MockTestRepository::new();
        // 400 must fire before any store access.
        repo.expect_list_published_by_club().times(0);

        let server = make_server(repo);

        let response = server.get("/api/tests/published").await;

        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "validation_error");
    }

    #[tokio::test]
    async fn test_published_lists_for_club() {
        let mut repo = MockTestRepository::new();
        repo.expect_list_published_by_club()
            .withf(|club_id| *club_id == 3)
            .times(1)
            .returning(|club_id| Ok(vec![sample_test(9, club_id)]));

        let server = make_server(repo);

        let response = server
            .get("/api/tests/published")
            .add_query_param("clubId", 3)
            .await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["tests"][0]["id"], 9);
        assert_eq!(body["tests"][0]["published"], true);
    }
}

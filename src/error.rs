use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    AuthFailed { message: String, details: Value },
    Unauthorized { message: String, details: Value },
    Forbidden { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
    Upstream { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn auth_failed(message: impl Into<String>, details: Value) -> Self {
        Self::AuthFailed {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::AuthFailed { message, details } => {
                (StatusCode::BAD_REQUEST, "auth_failed", message, details)
            }
            AppError::Unauthorized { message, details } => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message, details)
            }
            AppError::Forbidden { message, details } => {
                (StatusCode::FORBIDDEN, "forbidden", message, details)
            }
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
            AppError::Upstream { message, details } => {
                (StatusCode::BAD_GATEWAY, "upstream_error", message, details)
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (code, message) = match self {
            AppError::Validation { message, .. } => ("validation_error", message),
            AppError::AuthFailed { message, .. } => ("auth_failed", message),
            AppError::Unauthorized { message, .. } => ("unauthorized", message),
            AppError::Forbidden { message, .. } => ("forbidden", message),
            AppError::NotFound { message, .. } => ("not_found", message),
            AppError::Internal { message, .. } => ("internal_error", message),
            AppError::Upstream { message, .. } => ("upstream_error", message),
        };
        write!(f, "{}: {}", code, message)
    }
}

impl std::error::Error for AppError {}

/// Driver errors never reach the client verbatim; the detail is logged and
/// the response carries a generic message.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "database error");
        AppError::internal("Something went wrong", json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_envelope_shape() {
        let (status, body) =
            body_json(AppError::bad_request("Missing clubId", json!({"param": "clubId"}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "validation_error");
        assert_eq!(body["error"]["message"], "Missing clubId");
        assert_eq!(body["error"]["details"]["param"], "clubId");
    }

    #[tokio::test]
    async fn test_status_codes() {
        let cases = [
            (
                AppError::unauthorized("no token", json!({})),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::auth_failed("bad token", json!({})),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::forbidden("not a club", json!({})),
                StatusCode::FORBIDDEN,
            ),
            (
                AppError::not_found("missing", json!({})),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::internal("boom", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::upstream("provider down", json!({})),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (err, expected) in cases {
            let (status, _) = body_json(err).await;
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn test_sqlx_error_is_suppressed() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        match err {
            AppError::Internal { message, .. } => assert_eq!(message, "Something went wrong"),
            other => panic!("expected Internal, got {other:?}"),
        }
    }
}

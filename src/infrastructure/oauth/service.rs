//! Identity provider trait and error types.

use async_trait::async_trait;
use serde_json::json;

use crate::error::AppError;

/// Errors surfaced by the identity provider integration.
#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    #[error("OAuth login is not configured")]
    Disabled,

    #[error("Failed to reach identity provider: {0}")]
    Transport(String),

    #[error("Identity provider rejected the request: status {0}")]
    Rejected(u16),

    #[error("Identity provider response was malformed: {0}")]
    Malformed(String),
}

/// Provider detail is logged; the client sees a generic upstream failure.
impl From<OAuthError> for AppError {
    fn from(e: OAuthError) -> Self {
        tracing::error!(error = %e, "identity provider error");
        AppError::upstream("Identity provider error", json!({}))
    }
}

/// Profile fields resolved from the identity provider.
#[derive(Debug, Clone)]
pub struct OAuthUser {
    pub name: String,
    pub email: String,
}

/// Trait for completing a third-party identity handshake.
///
/// # Implementations
///
/// - [`crate::infrastructure::oauth::GoogleOAuth`] - Google OpenID Connect
/// - [`crate::infrastructure::oauth::DisabledOAuth`] - Fallback when credentials are absent
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// Builds the provider authorize URL for the given anti-forgery state.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::Disabled`] when no credentials are configured.
    fn authorize_url(&self, state: &str) -> Result<String, OAuthError>;

    /// Exchanges an authorization code for the authenticated user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::Transport`]/[`OAuthError::Rejected`] on provider
    /// failures and [`OAuthError::Malformed`] when the profile payload lacks
    /// the required fields.
    async fn exchange_code(&self, code: &str) -> Result<OAuthUser, OAuthError>;
}

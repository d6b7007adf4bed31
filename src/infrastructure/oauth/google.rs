//! Google OpenID Connect client.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use super::service::{OAuthError, OAuthProvider, OAuthUser};

const AUTHORIZE_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Google OAuth client requesting profile and email scopes.
pub struct GoogleOAuth {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct UserInfoResponse {
    name: Option<String>,
    email: Option<String>,
}

impl GoogleOAuth {
    /// Creates a client with application credentials and the registered
    /// callback URI.
    pub fn new(client_id: String, client_secret: String, redirect_uri: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id,
            client_secret,
            redirect_uri,
        }
    }
}

#[async_trait]
impl OAuthProvider for GoogleOAuth {
    fn authorize_url(&self, state: &str) -> Result<String, OAuthError> {
        let url = Url::parse_with_params(
            AUTHORIZE_ENDPOINT,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", "openid profile email"),
                ("state", state),
            ],
        )
        .map_err(|e| OAuthError::Malformed(e.to_string()))?;

        Ok(url.into())
    }

    async fn exchange_code(&self, code: &str) -> Result<OAuthUser, OAuthError> {
        let response = self
            .http
            .post(TOKEN_ENDPOINT)
            .form(&[
                ("code", code),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| OAuthError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(OAuthError::Rejected(response.status().as_u16()));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| OAuthError::Malformed(e.to_string()))?;

        let response = self
            .http
            .get(USERINFO_ENDPOINT)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .map_err(|e| OAuthError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(OAuthError::Rejected(response.status().as_u16()));
        }

        let profile: UserInfoResponse = response
            .json()
            .await
            .map_err(|e| OAuthError::Malformed(e.to_string()))?;

        let email = profile
            .email
            .ok_or_else(|| OAuthError::Malformed("profile has no email".to_string()))?;
        let name = profile.name.unwrap_or_else(|| email.clone());

        Ok(OAuthUser { name, email })
    }
}

/// Fallback provider for deployments without OAuth credentials.
///
/// Every operation fails with [`OAuthError::Disabled`], which the API layer
/// maps to an upstream error.
pub struct DisabledOAuth;

#[async_trait]
impl OAuthProvider for DisabledOAuth {
    fn authorize_url(&self, _state: &str) -> Result<String, OAuthError> {
        Err(OAuthError::Disabled)
    }

    async fn exchange_code(&self, _code: &str) -> Result<OAuthUser, OAuthError> {
        Err(OAuthError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_url_contains_scopes_and_state() {
        let client = GoogleOAuth::new(
            "client-id".to_string(),
            "client-secret".to_string(),
            "https://api.example.com/auth/google/callback".to_string(),
        );

        let url = client.authorize_url("state-token").unwrap();

        assert!(url.starts_with(AUTHORIZE_ENDPOINT));
        assert!(url.contains("client_id=client-id"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("state=state-token"));
        assert!(url.contains("scope=openid+profile+email") || url.contains("scope=openid%20profile%20email"));
        // The secret must never appear in a browser-visible URL.
        assert!(!url.contains("client-secret"));
    }

    #[tokio::test]
    async fn test_disabled_provider_rejects() {
        let provider = DisabledOAuth;

        assert!(matches!(
            provider.authorize_url("s"),
            Err(OAuthError::Disabled)
        ));
        assert!(matches!(
            provider.exchange_code("c").await,
            Err(OAuthError::Disabled)
        ));
    }
}

//! DTOs for the OAuth login flow.

use serde::{Deserialize, Serialize};

/// Query parameters the identity provider appends to the callback.
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: String,
    pub state: String,
}

/// Request body for redeeming a one-time login code.
#[derive(Debug, Deserialize)]
pub struct SessionExchangeRequest {
    pub code: String,
}

/// Redeemed session: display name and the bearer token for API access.
#[derive(Debug, Serialize)]
pub struct SessionExchangeResponse {
    pub name: String,
    pub token: String,
}

//! One-time login exchange codes issued at the end of the OAuth flow.

use chrono::{DateTime, Utc};

/// A stored exchange code. Only the HMAC of the raw code is persisted;
/// the raw value travels once in the browser redirect and is never stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SessionCode {
    pub id: i64,
    pub code_hash: String,
    pub principal_name: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub consumed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Input data for storing a freshly issued exchange code.
#[derive(Debug, Clone)]
pub struct NewSessionCode {
    pub code_hash: String,
    pub principal_name: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_new_session_code() {
        let code = NewSessionCode {
            code_hash: "ab".repeat(32),
            principal_name: "Asha Rao".to_string(),
            token: "jwt".to_string(),
            expires_at: Utc::now() + Duration::seconds(300),
        };

        assert_eq!(code.code_hash.len(), 64);
        assert!(code.expires_at > Utc::now());
    }
}

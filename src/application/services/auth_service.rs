//! Authentication service: JWT issuance/verification, OAuth state, and
//! one-time login exchange codes.

use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::NewSessionCode;
use crate::domain::repositories::{SessionCodeRepository, StudentRepository};
use crate::error::AppError;
use crate::infrastructure::oauth::OAuthUser;
use crate::utils::code_generator::generate_code;

type HmacSha256 = Hmac<Sha256>;

/// How long an OAuth `state` parameter stays valid.
const STATE_MAX_AGE_SECONDS: i64 = 600;

/// Principal role carried in token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Club,
    Student,
}

/// Claims carried by session tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub name: String,
    #[serde(rename = "userType")]
    pub user_type: UserType,
    pub iat: i64,
    pub exp: i64,
}

/// JWT encoder/decoder with an explicitly injected secret.
///
/// Constructed once from [`crate::config::Config`] and handed to the auth
/// guard and the services that issue tokens; no global state is involved.
#[derive(Clone)]
pub struct JwtCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    expiry_hours: i64,
}

impl JwtCodec {
    /// Creates a codec from the shared signing secret.
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
            expiry_hours,
        }
    }

    /// Issues a signed token for the given principal.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if encoding fails.
    pub fn issue(&self, sub: i64, name: &str, user_type: UserType) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub,
            name: name.to_string(),
            user_type,
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.expiry_hours)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|e| {
            tracing::error!(error = %e, "failed to sign session token");
            AppError::internal("Something went wrong", json!({}))
        })
    }

    /// Verifies a token's signature and expiry and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthFailed`] for malformed, tampered, or expired
    /// tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::auth_failed("Auth failed", json!({})))
    }
}

/// Result of redeeming a login exchange code.
#[derive(Debug, Clone)]
pub struct SessionLogin {
    pub name: String,
    pub token: String,
}

/// Service backing the OAuth login flow and the auth guard's token side.
///
/// Exchange codes and `state` parameters are HMAC-SHA256-protected with the
/// same server-side secret discipline applied to tokens: the database only
/// ever sees the MAC, never the raw code.
pub struct AuthService {
    codec: JwtCodec,
    signing_secret: String,
    codes: Arc<dyn SessionCodeRepository>,
    students: Arc<dyn StudentRepository>,
    code_ttl_seconds: i64,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(
        codec: JwtCodec,
        signing_secret: String,
        codes: Arc<dyn SessionCodeRepository>,
        students: Arc<dyn StudentRepository>,
        code_ttl_seconds: i64,
    ) -> Self {
        Self {
            codec,
            signing_secret,
            codes,
            students,
            code_ttl_seconds,
        }
    }

    /// The codec used for issuing and verifying session tokens.
    pub fn codec(&self) -> &JwtCodec {
        &self.codec
    }

    fn mac_hex(&self, input: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(input.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Issues an anti-forgery `state` parameter: `nonce.timestamp.mac`.
    pub fn issue_state(&self) -> String {
        let nonce = generate_code();
        let issued_at = Utc::now().timestamp();
        let mac = self.mac_hex(&format!("{nonce}.{issued_at}"));
        format!("{nonce}.{issued_at}.{mac}")
    }

    /// Verifies a callback `state` parameter's MAC and freshness.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthFailed`] for tampered, malformed, or stale
    /// values.
    pub fn verify_state(&self, state: &str) -> Result<(), AppError> {
        let reject = || AppError::auth_failed("Auth failed", json!({"reason": "invalid state"}));

        let mut parts = state.splitn(3, '.');
        let (nonce, issued_at, mac) = match (parts.next(), parts.next(), parts.next()) {
            (Some(n), Some(t), Some(m)) => (n, t, m),
            _ => return Err(reject()),
        };

        let expected = self.mac_hex(&format!("{nonce}.{issued_at}"));
        if expected != mac {
            return Err(reject());
        }

        let issued_at: i64 = issued_at.parse().map_err(|_| reject())?;
        if Utc::now().timestamp() - issued_at > STATE_MAX_AGE_SECONDS {
            return Err(reject());
        }

        Ok(())
    }

    /// Completes a provider login: resolves the local student, issues a
    /// session token, and stores a one-time exchange code for it.
    ///
    /// Returns the student's display name and the raw exchange code to embed
    /// in the browser redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn complete_login(&self, user: OAuthUser) -> Result<(String, String), AppError> {
        let student = self
            .students
            .find_or_create_by_email(&user.name, &user.email)
            .await?;

        let token = self
            .codec
            .issue(student.id, &student.name, UserType::Student)?;

        let raw_code = generate_code();
        self.codes
            .create(NewSessionCode {
                code_hash: self.mac_hex(&raw_code),
                principal_name: student.name.clone(),
                token,
                expires_at: Utc::now() + Duration::seconds(self.code_ttl_seconds),
            })
            .await?;

        Ok((student.name, raw_code))
    }

    /// Redeems a one-time exchange code for the session it wraps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when the code is unknown, expired,
    /// or already consumed; [`AppError::Internal`] on store failures.
    pub async fn redeem_code(&self, raw_code: &str) -> Result<SessionLogin, AppError> {
        let consumed = self.codes.consume(&self.mac_hex(raw_code)).await?;

        let code = consumed.ok_or_else(|| {
            metrics::counter!("auth_code_rejections_total").increment(1);
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid or expired login code"}),
            )
        })?;

        Ok(SessionLogin {
            name: code.principal_name,
            token: code.token,
        })
    }
}

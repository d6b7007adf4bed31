//! Third-party identity provider integration.
//!
//! - [`service`] - [`OAuthProvider`] trait and error types
//! - [`google`] - Google OpenID Connect implementation + disabled fallback

pub mod google;
pub mod service;

pub use google::{DisabledOAuth, GoogleOAuth};
pub use service::{OAuthError, OAuthProvider, OAuthUser};

#[cfg(test)]
pub use service::MockOAuthProvider;

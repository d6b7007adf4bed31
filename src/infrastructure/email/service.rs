//! Email delivery trait and error types.

use async_trait::async_trait;

/// Errors surfaced by an email delivery backend.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Failed to reach email provider: {0}")]
    Transport(String),

    #[error("Email provider rejected the message: status {0}")]
    Rejected(u16),
}

/// An outbound message. Bodies are HTML; the sender address is owned by
/// the client implementation.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Trait for dispatching outbound email.
///
/// # Implementations
///
/// - [`crate::infrastructure::email::HttpEmailClient`] - HTTP delivery provider
/// - [`crate::infrastructure::email::NullEmailClient`] - No-op for unconfigured deployments
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailClient: Send + Sync {
    /// Dispatches one message.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError::Transport`] when the provider is unreachable
    /// and [`EmailError::Rejected`] when it answers with a non-success
    /// status.
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError>;
}

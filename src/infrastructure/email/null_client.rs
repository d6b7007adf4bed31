//! No-op email client for deployments without delivery credentials.

use async_trait::async_trait;
use tracing::debug;

use super::service::{EmailClient, EmailError, EmailMessage};

/// An email client that drops every message.
///
/// Used when delivery credentials are not configured, so notification
/// endpoints stay functional in development environments.
pub struct NullEmailClient;

impl NullEmailClient {
    /// Creates a new NullEmailClient instance.
    pub fn new() -> Self {
        debug!("Using NullEmailClient (email delivery disabled)");
        Self
    }
}

impl Default for NullEmailClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailClient for NullEmailClient {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        debug!(to = %message.to, subject = %message.subject, "dropping email (delivery disabled)");
        Ok(())
    }
}

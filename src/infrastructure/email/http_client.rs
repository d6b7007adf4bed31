//! HTTP email delivery client.

use async_trait::async_trait;
use serde::Serialize;

use super::service::{EmailClient, EmailError, EmailMessage};

/// Email client speaking the delivery provider's JSON API.
///
/// Authentication uses a server token header; the optional region header
/// routes the message through the configured sending region.
pub struct HttpEmailClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
    sender: String,
    region: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
}

impl HttpEmailClient {
    /// Creates a client for the given provider endpoint and credentials.
    pub fn new(
        base_url: String,
        api_token: String,
        sender: String,
        region: Option<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_token,
            sender,
            region,
        }
    }
}

#[async_trait]
impl EmailClient for HttpEmailClient {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        let url = format!("{}/email", self.base_url.trim_end_matches('/'));

        let mut request = self
            .http
            .post(&url)
            .header("X-Server-Token", &self.api_token)
            .json(&SendEmailRequest {
                from: &self.sender,
                to: &message.to,
                subject: &message.subject,
                html_body: &message.html_body,
            });

        if let Some(region) = &self.region {
            request = request.header("X-Region", region);
        }

        let response = request
            .send()
            .await
            .map_err(|e| EmailError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(EmailError::Rejected(response.status().as_u16()));
        }

        Ok(())
    }
}

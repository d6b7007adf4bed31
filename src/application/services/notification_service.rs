//! Recruitment-update email dispatch.

use futures::stream::{self, StreamExt};
use std::sync::Arc;

use crate::infrastructure::email::{EmailClient, EmailMessage};

const SUBJECT: &str = "Updates for CUBE Recruitments";

/// A recruitment-update recipient with the domains they missed.
#[derive(Debug, Clone, Copy)]
struct Recipient {
    name: &'static str,
    email: &'static str,
    domains_missed: &'static str,
}

// Fixed recipient list for the current recruitment drive.
const RECRUITMENT_UPDATE_RECIPIENTS: &[Recipient] = &[
    Recipient {
        name: "Rajat Sablok",
        email: "rajat.sablok2018@vitstudent.ac.in",
        domains_missed: "Speed-Cuber, Management",
    },
    Recipient {
        name: "Shivam Mehta",
        email: "shivam.mehta2019@vitstudent.ac.in",
        domains_missed: "Speed-Cuber",
    },
    Recipient {
        name: "Anmol Gupta",
        email: "anmol.gupta2020@vitstudent.ac.in",
        domains_missed: "Speed-Cuber, Management, Cubing Enthusiast",
    },
];

/// Result of one dispatch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    pub sent: usize,
    pub failed: usize,
}

/// Service that fans recruitment updates out to the fixed recipient list.
pub struct NotificationService {
    email: Arc<dyn EmailClient>,
    concurrency: usize,
}

impl NotificationService {
    /// Creates a new notification service.
    ///
    /// `concurrency` bounds the fan-out of a dispatch run.
    pub fn new(email: Arc<dyn EmailClient>, concurrency: usize) -> Self {
        Self {
            email,
            concurrency: concurrency.max(1),
        }
    }

    /// Dispatches one update per recipient.
    ///
    /// Per-recipient failures are logged and counted; a failed send never
    /// aborts the run.
    pub async fn send_recruitment_updates(&self) -> DispatchReport {
        let results: Vec<bool> = stream::iter(RECRUITMENT_UPDATE_RECIPIENTS.iter().copied())
            .map(|recipient| {
                let client = Arc::clone(&self.email);
                async move {
                    let message = EmailMessage {
                        to: recipient.email.to_string(),
                        subject: SUBJECT.to_string(),
                        html_body: render_update_body(recipient.name, recipient.domains_missed),
                    };

                    match client.send(&message).await {
                        Ok(()) => true,
                        Err(e) => {
                            tracing::warn!(
                                recipient = recipient.email,
                                error = %e,
                                "failed to send recruitment update"
                            );
                            false
                        }
                    }
                }
            })
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        let sent = results.iter().filter(|ok| **ok).count();
        let failed = results.len() - sent;

        metrics::counter!("notification_emails_sent_total").increment(sent as u64);
        metrics::counter!("notification_emails_failed_total").increment(failed as u64);

        DispatchReport { sent, failed }
    }
}

fn render_update_body(name: &str, domains_missed: &str) -> String {
    format!(
        "<html><body>\
         <p>Hi {name},</p>\
         <p>You have pending rounds in the following domains of C.U.B.E.'s \
         recruitment tests: <strong>{domains_missed}</strong>.</p>\
         <p>Head over to your dashboard to finish them before the window \
         closes.</p>\
         <p>— Team CUBE</p>\
         </body></html>"
    )
}

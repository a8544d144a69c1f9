//! SendGrid delivery
//!
//! Posts the rendered digest to the SendGrid v3 mail API. One attempt; any
//! non-2xx response is returned as an error with the response body.

use std::time::Duration;

use anyhow::{Context, bail};
use reqwest::blocking::Client;
use serde::Serialize;

use crate::config::EmailConfig;
use crate::core::models::IssueInfo;
use crate::core::ports::Notifier;
use crate::core::services::Digest;

use super::email::{render_html, render_text, subject};

/// SendGrid v3 send endpoint
pub const SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// A named mailbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    /// Email address
    pub email: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Recipients sharing one copy of the message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Personalization {
    /// Recipient list
    pub to: Vec<Address>,
}

/// One body part
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    /// MIME type of the part
    #[serde(rename = "type")]
    pub mime: &'static str,
    /// Part body
    pub value: String,
}

/// Request body of the send endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailPayload {
    /// Recipients
    pub personalizations: Vec<Personalization>,
    /// Sender
    pub from: Address,
    /// Subject line
    pub subject: String,
    /// Body parts, plain text first
    pub content: Vec<Content>,
}

impl MailPayload {
    /// Assemble the message for one digest
    #[must_use]
    pub fn new(from: Address, to: &str, issue: &IssueInfo, digest: &Digest) -> Self {
        Self {
            personalizations: vec![Personalization {
                to: vec![Address {
                    email: to.to_string(),
                    name: None,
                }],
            }],
            from,
            subject: subject(issue),
            content: vec![
                Content {
                    mime: "text/plain",
                    value: render_text(issue, digest),
                },
                Content {
                    mime: "text/html",
                    value: render_html(issue, digest),
                },
            ],
        }
    }
}

/// Notifier that emails the digest through SendGrid
#[derive(Debug)]
pub struct SendGridNotifier {
    client: Client,
    api_key: String,
    from: Address,
    to: String,
}

impl SendGridNotifier {
    /// Build a notifier from the `[email]` configuration
    ///
    /// Fails when the API key or the recipient is missing.
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .context("SENDGRID_API_KEY is not set")?;
        let to = config
            .to_email
            .clone()
            .filter(|t| !t.trim().is_empty())
            .context("No recipient configured (set TO_EMAIL, [email].to_email or pass --to)")?;

        let client = Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key,
            from: Address {
                email: config.from_email.clone(),
                name: Some(config.from_name.clone()).filter(|n| !n.is_empty()),
            },
            to,
        })
    }
}

impl Notifier for SendGridNotifier {
    fn send(&self, issue: &IssueInfo, digest: &Digest) -> anyhow::Result<()> {
        let payload = MailPayload::new(self.from.clone(), &self.to, issue, digest);
        log::debug!("Sending {:?} to {}", payload.subject, self.to);

        let response = self
            .client
            .post(SEND_URL)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .context("Failed to reach SendGrid")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            bail!("SendGrid rejected the message ({status}): {}", body.trim());
        }

        log::info!("Digest sent to {} ({status})", self.to);
        Ok(())
    }

    fn recipient(&self) -> &str {
        &self.to
    }
}

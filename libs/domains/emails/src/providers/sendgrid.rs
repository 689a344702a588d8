//! SendGrid email provider
//!
//! Sends emails as JSON via the SendGrid v3 API.

use super::{EmailProvider, ProviderOutcome, Prober, execute};
use crate::config::ProviderConfig;
use crate::error::EmailResult;
use crate::models::EmailMessage;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use tracing::debug;

/// SendGrid email provider
pub struct SendGridProvider {
    config: ProviderConfig,
    client: Client,
    prober: Prober,
}

impl SendGridProvider {
    pub fn new(config: ProviderConfig) -> EmailResult<Self> {
        Ok(Self {
            config,
            client: Client::builder().build()?,
            prober: Prober::new()?,
        })
    }
}

/// SendGrid API request payload
#[derive(Debug, Serialize)]
pub struct SendGridRequest {
    personalizations: Vec<Personalization>,
    from: EmailAddress,
    content: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Personalization {
    subject: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    to: Vec<EmailAddress>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    cc: Vec<EmailAddress>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    bcc: Vec<EmailAddress>,
}

#[derive(Debug, Serialize)]
struct EmailAddress {
    email: String,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(rename = "type")]
    content_type: String,
    value: String,
}

fn addresses(list: &[String]) -> Vec<EmailAddress> {
    list.iter()
        .map(|email| EmailAddress {
            email: email.clone(),
        })
        .collect()
}

/// Translates a message into the SendGrid payload. Empty recipient lists are
/// left out of the personalization.
pub fn build_body(message: &EmailMessage) -> SendGridRequest {
    SendGridRequest {
        personalizations: vec![Personalization {
            subject: message.subject.clone(),
            to: addresses(&message.to),
            cc: addresses(&message.cc),
            bcc: addresses(&message.bcc),
        }],
        from: EmailAddress {
            email: message.from.clone(),
        },
        content: vec![Content {
            content_type: "text/plain".to_string(),
            value: message.text.clone(),
        }],
    }
}

#[async_trait]
impl EmailProvider for SendGridProvider {
    async fn send(&self, message: &EmailMessage) -> ProviderOutcome {
        let body = build_body(message);

        debug!(
            recipients = message.recipient_count(),
            subject = %message.subject,
            "Sending email via SendGrid"
        );

        let request = self
            .client
            .request(self.config.method.clone(), &self.config.url)
            .bearer_auth(&self.config.api_key)
            .header(CONTENT_TYPE, &self.config.content_type)
            .header(ACCEPT, &self.config.accept)
            .json(&body);

        execute(self.name(), request).await
    }

    async fn probe(&self) -> bool {
        self.prober.probe(&self.config.url).await
    }

    fn name(&self) -> &'static str {
        self.config.kind.name()
    }
}

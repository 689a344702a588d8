//! Mailgun email provider
//!
//! Sends emails as a form-encoded body with HTTP basic auth.

use super::{EmailProvider, ProviderOutcome, Prober, execute};
use crate::config::ProviderConfig;
use crate::error::EmailResult;
use crate::models::EmailMessage;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

/// Mailgun authenticates every API key with this fixed user name.
pub const MAILGUN_USER: &str = "api";

pub struct MailgunProvider {
    config: ProviderConfig,
    client: Client,
    prober: Prober,
}

impl MailgunProvider {
    pub fn new(config: ProviderConfig) -> EmailResult<Self> {
        Ok(Self {
            config,
            client: Client::builder().build()?,
            prober: Prober::new()?,
        })
    }
}

/// Form fields in send order, one `to`/`cc`/`bcc` pair per address.
pub fn build_form(message: &EmailMessage) -> Vec<(&'static str, &str)> {
    let mut form = Vec::with_capacity(3 + message.recipient_count());
    form.push(("from", message.from.as_str()));
    form.extend(message.to.iter().map(|a| ("to", a.as_str())));
    form.extend(message.cc.iter().map(|a| ("cc", a.as_str())));
    form.extend(message.bcc.iter().map(|a| ("bcc", a.as_str())));
    form.push(("subject", message.subject.as_str()));
    form.push(("text", message.text.as_str()));
    form
}

#[async_trait]
impl EmailProvider for MailgunProvider {
    async fn send(&self, message: &EmailMessage) -> ProviderOutcome {
        let form = build_form(message);

        debug!(
            recipients = message.recipient_count(),
            subject = %message.subject,
            "Sending email via Mailgun"
        );

        let request = self
            .client
            .request(self.config.method.clone(), &self.config.url)
            .basic_auth(MAILGUN_USER, Some(&self.config.api_key))
            .header(CONTENT_TYPE, &self.config.content_type)
            .header(ACCEPT, &self.config.accept)
            .form(&form);

        execute(self.name(), request).await
    }

    async fn probe(&self) -> bool {
        self.prober.probe(&self.config.url).await
    }

    fn name(&self) -> &'static str {
        self.config.kind.name()
    }
}

//! Email provider adapters

pub mod mailgun;
pub mod mock;
pub mod probe;
pub mod sendgrid;

pub use mailgun::MailgunProvider;
pub use mock::MockProvider;
pub use probe::{PROBE_TIMEOUT, Prober};
pub use sendgrid::SendGridProvider;

use crate::models::EmailMessage;
use async_trait::async_trait;
use reqwest::RequestBuilder;
use tracing::{debug, error};

/// What happened to a single send attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderOutcome {
    /// The provider answered with a status below 400.
    Delivered { status: u16 },
    /// The provider answered with a status of 400 or above.
    Rejected { status: u16 },
    /// No response: connection refused, timeout, TLS failure...
    TransportFailed(String),
}

/// Trait for email providers
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send a validated message. Failures are reported in the outcome, never
    /// as an error.
    async fn send(&self, message: &EmailMessage) -> ProviderOutcome;

    /// Whether the provider endpoint currently answers.
    async fn probe(&self) -> bool;

    /// Get provider name
    fn name(&self) -> &'static str;
}

/// Sends a prepared request and classifies the response.
pub(crate) async fn execute(provider: &'static str, request: RequestBuilder) -> ProviderOutcome {
    match request.send().await {
        Ok(response) => {
            let status = response.status();

            if status.as_u16() < 400 {
                debug!(provider, status = status.as_u16(), "Provider accepted email");
                ProviderOutcome::Delivered {
                    status: status.as_u16(),
                }
            } else {
                let body = response.text().await.unwrap_or_default();
                error!(
                    provider,
                    status = status.as_u16(),
                    reason = status.canonical_reason().unwrap_or(""),
                    error = %body,
                    "Provider rejected email"
                );
                ProviderOutcome::Rejected {
                    status: status.as_u16(),
                }
            }
        }
        Err(e) => {
            error!(provider, error = %e, "Provider request failed");
            ProviderOutcome::TransportFailed(e.to_string())
        }
    }
}

use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::error::EmailResult;
use crate::models::{DispatchOutcome, DispatchResult, EmailMessage, SendEmailRequest};
use crate::normalizer::normalize;
use crate::outbox::{LogOutbox, Outbox};
use crate::providers::{EmailProvider, ProviderOutcome};
use crate::validation::validate_request;

/// Routes validated emails to the first reachable provider.
///
/// The primary is always probed first. The fallback is only probed when the
/// primary is unreachable. Once a provider is chosen its send result is
/// final: a rejected or failed send is queued, never retried on the other
/// provider.
#[derive(Clone)]
pub struct Dispatcher {
    primary: Arc<dyn EmailProvider>,
    fallback: Arc<dyn EmailProvider>,
    outbox: Arc<dyn Outbox>,
}

impl Dispatcher {
    /// Dispatcher that logs queued messages.
    pub fn new(primary: Arc<dyn EmailProvider>, fallback: Arc<dyn EmailProvider>) -> Self {
        Self::with_outbox(primary, fallback, Arc::new(LogOutbox))
    }

    pub fn with_outbox(
        primary: Arc<dyn EmailProvider>,
        fallback: Arc<dyn EmailProvider>,
        outbox: Arc<dyn Outbox>,
    ) -> Self {
        Self {
            primary,
            fallback,
            outbox,
        }
    }

    /// Providers in priority order.
    pub fn providers(&self) -> [&Arc<dyn EmailProvider>; 2] {
        [&self.primary, &self.fallback]
    }

    /// Validate a request, dispatch it and build the client reply.
    ///
    /// Only validation fails; every dispatch outcome is a reply.
    pub async fn send_email(&self, request: SendEmailRequest) -> EmailResult<DispatchResult> {
        let message = validate_request(request)?;
        let outcome = self.dispatch(&message).await;

        Ok(normalize(&outcome))
    }

    /// Probe, send and queue a validated message.
    #[instrument(skip_all, fields(recipients = message.recipient_count()))]
    pub async fn dispatch(&self, message: &EmailMessage) -> DispatchOutcome {
        let outcome = match self.select_provider().await {
            Some(provider) => self.deliver(provider, message).await,
            None => {
                warn!("Both providers are not available");
                DispatchOutcome::Unreachable
            }
        };

        if !outcome.is_sent() {
            if let Err(e) = self.outbox.enqueue(message, &outcome).await {
                error!(error = %e, "Failed to queue email");
            }
        }

        outcome
    }

    #[instrument(skip_all)]
    async fn select_provider(&self) -> Option<&dyn EmailProvider> {
        for provider in self.providers() {
            if provider.probe().await {
                info!(provider = provider.name(), "Provider selected");
                return Some(provider.as_ref());
            }
            warn!(provider = provider.name(), "Provider unreachable");
        }

        None
    }

    #[instrument(skip_all, fields(provider = provider.name()))]
    async fn deliver(&self, provider: &dyn EmailProvider, message: &EmailMessage) -> DispatchOutcome {
        let name = provider.name();

        match provider.send(message).await {
            ProviderOutcome::Delivered { status } => {
                info!(status, "Email sent");
                DispatchOutcome::Sent { provider: name }
            }
            ProviderOutcome::Rejected { status } => DispatchOutcome::Rejected {
                provider: name,
                status,
            },
            ProviderOutcome::TransportFailed(reason) => DispatchOutcome::SendFailed {
                provider: name,
                reason,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockProvider;

    fn message() -> EmailMessage {
        EmailMessage::new("a@example.com", "Hi", "Body").with_to("b@example.com")
    }

    #[tokio::test]
    async fn test_primary_wins_when_reachable() {
        let primary = Arc::new(MockProvider::new("sendgrid"));
        let fallback = Arc::new(MockProvider::new("mailgun"));
        let dispatcher = Dispatcher::new(primary.clone(), fallback.clone());

        let outcome = dispatcher.dispatch(&message()).await;

        assert_eq!(outcome, DispatchOutcome::Sent { provider: "sendgrid" });
        assert_eq!(fallback.probe_count(), 0);
        assert_eq!(fallback.sent_count().await, 0);
    }

    #[tokio::test]
    async fn test_fallback_used_when_primary_unreachable() {
        let primary = Arc::new(MockProvider::unreachable("sendgrid"));
        let fallback = Arc::new(MockProvider::new("mailgun"));
        let dispatcher = Dispatcher::new(primary.clone(), fallback.clone());

        let outcome = dispatcher.dispatch(&message()).await;

        assert_eq!(outcome, DispatchOutcome::Sent { provider: "mailgun" });
        assert_eq!(primary.sent_count().await, 0);
        assert_eq!(fallback.sent_count().await, 1);
    }

    #[tokio::test]
    async fn test_send_email_rejects_invalid_request_before_probing() {
        let primary = Arc::new(MockProvider::new("sendgrid"));
        let fallback = Arc::new(MockProvider::new("mailgun"));
        let dispatcher = Dispatcher::new(primary.clone(), fallback.clone());

        let result = dispatcher.send_email(SendEmailRequest::default()).await;

        assert!(result.is_err());
        assert_eq!(primary.probe_count(), 0);
        assert_eq!(fallback.probe_count(), 0);
    }
}

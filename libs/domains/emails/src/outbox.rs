//! Sink for emails that could not be handed to a provider.

use crate::error::EmailResult;
use crate::models::{DispatchOutcome, EmailMessage};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

/// Receives every message whose dispatch ended queued.
///
/// Implementations decide what "queued" means; a durable store with a retry
/// worker would plug in here.
#[async_trait]
pub trait Outbox: Send + Sync {
    async fn enqueue(&self, message: &EmailMessage, outcome: &DispatchOutcome) -> EmailResult<()>;
}

/// Logs queued messages and drops them.
#[derive(Clone, Debug, Default)]
pub struct LogOutbox;

#[async_trait]
impl Outbox for LogOutbox {
    async fn enqueue(&self, message: &EmailMessage, outcome: &DispatchOutcome) -> EmailResult<()> {
        warn!(
            provider = outcome.provider().unwrap_or("none"),
            outcome = ?outcome,
            recipients = message.recipient_count(),
            subject = %message.subject,
            "Email queued, no durable outbox configured"
        );
        Ok(())
    }
}

/// Keeps queued messages in memory. Intended for tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryOutbox {
    entries: Arc<Mutex<Vec<(EmailMessage, DispatchOutcome)>>>,
}

impl InMemoryOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn entries(&self) -> Vec<(EmailMessage, DispatchOutcome)> {
        self.entries.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl Outbox for InMemoryOutbox {
    async fn enqueue(&self, message: &EmailMessage, outcome: &DispatchOutcome) -> EmailResult<()> {
        self.entries
            .lock()
            .await
            .push((message.clone(), outcome.clone()));
        Ok(())
    }
}

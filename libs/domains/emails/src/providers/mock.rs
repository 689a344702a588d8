//! Mock email provider for testing

use super::{EmailProvider, ProviderOutcome};
use crate::models::EmailMessage;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// Mock provider that records what it was asked to send
pub struct MockProvider {
    name: &'static str,
    reachable: bool,
    outcome: ProviderOutcome,
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    probes: AtomicUsize,
}

impl MockProvider {
    /// A reachable provider that delivers everything with 202.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            reachable: true,
            outcome: ProviderOutcome::Delivered { status: 202 },
            sent: Arc::new(Mutex::new(Vec::new())),
            probes: AtomicUsize::new(0),
        }
    }

    /// A provider whose probe always fails.
    pub fn unreachable(name: &'static str) -> Self {
        Self {
            reachable: false,
            ..Self::new(name)
        }
    }

    /// Answer every send with `outcome` instead of delivering.
    pub fn with_outcome(mut self, outcome: ProviderOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Get all messages passed to `send`
    pub async fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }

    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailProvider for MockProvider {
    async fn send(&self, message: &EmailMessage) -> ProviderOutcome {
        self.sent.lock().await.push(message.clone());
        self.outcome.clone()
    }

    async fn probe(&self) -> bool {
        self.probes.fetch_add(1, Ordering::SeqCst);
        self.reachable
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

//! Emails Domain
//!
//! Relays send requests to one of two email providers, SendGrid first and
//! Mailgun as fallback.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← POST /api/emails
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Dispatcher  │  ← validate, probe, send, queue, normalize
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Providers  │  ← SendGrid (JSON) / Mailgun (form), liveness probe
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← request DTO, message, results
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_emails::{
//!     handlers,
//!     providers::MockProvider,
//!     Dispatcher,
//! };
//! use std::sync::Arc;
//!
//! let dispatcher = Dispatcher::new(
//!     Arc::new(MockProvider::new("primary")),
//!     Arc::new(MockProvider::new("fallback")),
//! );
//!
//! let router = handlers::router(dispatcher);
//! ```

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod outbox;
pub mod providers;
pub mod validation;

// Re-export commonly used types
pub use config::{ProviderConfig, ProviderKind, ProvidersConfig};
pub use dispatcher::Dispatcher;
pub use error::{EmailError, EmailResult};
pub use models::{
    DispatchOutcome, DispatchResult, EmailMessage, QUEUED_MESSAGE, SENT_MESSAGE, SendEmailRequest,
};
pub use outbox::{InMemoryOutbox, LogOutbox, Outbox};
pub use providers::{EmailProvider, MailgunProvider, ProviderOutcome, SendGridProvider};

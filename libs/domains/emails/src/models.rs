//! Data models for the emails domain.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail, ValidationError};

/// Reply message when a provider accepted the email.
pub const SENT_MESSAGE: &str = "Your email has been sent";

/// Reply message when the email could not be handed to a provider.
pub const QUEUED_MESSAGE: &str = "Your email has been added to the queue";

/// Every address in the list must be a syntactically valid email.
fn validate_address_list(addresses: &[String]) -> Result<(), ValidationError> {
    if addresses.iter().all(|address| address.validate_email()) {
        Ok(())
    } else {
        Err(ValidationError::new("email_list"))
    }
}

/// Body of `POST /api/emails`.
///
/// Every field is optional at the type level so one validation pass can
/// report all missing fields together. Keys outside the schema land in
/// `unknown` and are rejected by [`crate::validation::validate_request`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct SendEmailRequest {
    /// Sender address
    #[validate(
        required(message = "\"from\" is required"),
        email(message = "\"from\" must be a valid email")
    )]
    #[schema(example = "sender@example.com")]
    pub from: Option<String>,

    #[validate(custom(function = "validate_address_list"))]
    pub to: Option<Vec<String>>,

    #[validate(custom(function = "validate_address_list"))]
    pub cc: Option<Vec<String>>,

    #[validate(custom(function = "validate_address_list"))]
    pub bcc: Option<Vec<String>>,

    #[validate(
        required(message = "\"subject\" is required"),
        length(min = 1, message = "\"subject\" is not allowed to be empty")
    )]
    pub subject: Option<String>,

    /// Plain-text body
    #[validate(
        required(message = "\"text\" is required"),
        length(min = 1, message = "\"text\" is not allowed to be empty")
    )]
    pub text: Option<String>,

    #[serde(flatten)]
    #[schema(ignore)]
    pub unknown: BTreeMap<String, Value>,
}

/// A validated email, ready to hand to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub subject: String,
    pub text: String,
}

impl EmailMessage {
    /// Message with a sender, subject and body and no recipients yet.
    pub fn new(
        from: impl Into<String>,
        subject: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: Vec::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
            subject: subject.into(),
            text: text.into(),
        }
    }

    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to.push(to.into());
        self
    }

    pub fn with_cc(mut self, cc: impl Into<String>) -> Self {
        self.cc.push(cc.into());
        self
    }

    pub fn with_bcc(mut self, bcc: impl Into<String>) -> Self {
        self.bcc.push(bcc.into());
        self
    }

    /// Total number of recipients across to, cc and bcc.
    pub fn recipient_count(&self) -> usize {
        self.to.len() + self.cc.len() + self.bcc.len()
    }
}

/// Reply to a completed dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DispatchResult {
    /// Completion time, milliseconds since the Unix epoch
    #[schema(example = 1_700_000_000_000_i64)]
    pub timestamp: i64,
    #[schema(example = "Your email has been sent")]
    pub message: String,
}

/// How a dispatch ended.
///
/// Clients only see "sent" or "queued"; the finer split is kept for logs and
/// the outbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The provider accepted the message (status < 400).
    Sent { provider: &'static str },
    /// The provider answered the send with status >= 400.
    Rejected { provider: &'static str, status: u16 },
    /// The send never got a response.
    SendFailed {
        provider: &'static str,
        reason: String,
    },
    /// Neither provider answered its probe.
    Unreachable,
}

impl DispatchOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, DispatchOutcome::Sent { .. })
    }

    /// Provider that handled the send, if one was reached.
    pub fn provider(&self) -> Option<&'static str> {
        match self {
            DispatchOutcome::Sent { provider }
            | DispatchOutcome::Rejected { provider, .. }
            | DispatchOutcome::SendFailed { provider, .. } => Some(provider),
            DispatchOutcome::Unreachable => None,
        }
    }
}

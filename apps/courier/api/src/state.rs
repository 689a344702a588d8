//! Application state management.

use domain_emails::{Dispatcher, MailgunProvider, SendGridProvider};
use std::sync::Arc;

use crate::config::Config;

/// Shared application state.
///
/// Cloning is cheap: the dispatcher only holds `Arc`s to the providers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// SendGrid first, Mailgun as fallback
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(config: Config) -> eyre::Result<Self> {
        let sendgrid = SendGridProvider::new(config.providers.sendgrid.clone())?;
        let mailgun = MailgunProvider::new(config.providers.mailgun.clone())?;
        let dispatcher = Dispatcher::new(Arc::new(sendgrid), Arc::new(mailgun));

        Ok(Self { config, dispatcher })
    }
}

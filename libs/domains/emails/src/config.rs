//! Provider configuration loaded from the environment.

use core_config::{ConfigError, FromEnv, env_or_default, env_required, parse_value};
use reqwest::Method;
use std::fmt;

/// Public SendGrid v3 send endpoint.
pub const SENDGRID_DEFAULT_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// The two supported providers, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    SendGrid,
    Mailgun,
}

impl ProviderKind {
    /// Short name used in logs and readiness output.
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::SendGrid => "sendgrid",
            ProviderKind::Mailgun => "mailgun",
        }
    }

    fn env_prefix(&self) -> &'static str {
        match self {
            ProviderKind::SendGrid => "SENDGRID",
            ProviderKind::Mailgun => "MAILGUN",
        }
    }

    fn default_url(&self) -> Option<&'static str> {
        match self {
            ProviderKind::SendGrid => Some(SENDGRID_DEFAULT_URL),
            // Mailgun URLs carry the sending domain
            ProviderKind::Mailgun => None,
        }
    }

    fn default_content_type(&self) -> &'static str {
        match self {
            ProviderKind::SendGrid => "application/json",
            ProviderKind::Mailgun => "application/x-www-form-urlencoded",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Connection details for one provider.
#[derive(Clone)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub url: String,
    pub method: Method,
    pub api_key: String,
    pub content_type: String,
    pub accept: String,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("kind", &self.kind)
            .field("url", &self.url)
            .field("method", &self.method)
            .field("api_key", &"[REDACTED]")
            .field("content_type", &self.content_type)
            .field("accept", &self.accept)
            .finish()
    }
}

impl ProviderConfig {
    /// Config with the provider's default method and headers.
    pub fn new(kind: ProviderKind, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
            method: Method::POST,
            api_key: api_key.into(),
            content_type: kind.default_content_type().to_string(),
            accept: "application/json".to_string(),
        }
    }

    /// Reads `<PREFIX>_URL`, `<PREFIX>_API_KEY`, `<PREFIX>_METHOD`,
    /// `<PREFIX>_CONTENT_TYPE` and `<PREFIX>_ACCEPT`.
    pub fn from_env_for(kind: ProviderKind) -> Result<Self, ConfigError> {
        let prefix = kind.env_prefix();
        let key = |name: &str| format!("{}_{}", prefix, name);

        let url = match kind.default_url() {
            Some(default) => env_or_default(&key("URL"), default),
            None => env_required(&key("URL"))?,
        };
        let api_key = env_required(&key("API_KEY"))?;
        let method_key = key("METHOD");
        let method: Method = parse_value(&method_key, &env_or_default(&method_key, "POST"))?;
        let content_type = env_or_default(&key("CONTENT_TYPE"), kind.default_content_type());
        let accept = env_or_default(&key("ACCEPT"), "application/json");

        Ok(Self {
            kind,
            url,
            method,
            api_key,
            content_type,
            accept,
        })
    }
}

/// Both providers, primary first.
#[derive(Clone, Debug)]
pub struct ProvidersConfig {
    pub sendgrid: ProviderConfig,
    pub mailgun: ProviderConfig,
}

impl FromEnv for ProvidersConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            sendgrid: ProviderConfig::from_env_for(ProviderKind::SendGrid)?,
            mailgun: ProviderConfig::from_env_for(ProviderKind::Mailgun)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 10] = [
        "SENDGRID_URL",
        "SENDGRID_API_KEY",
        "SENDGRID_METHOD",
        "SENDGRID_CONTENT_TYPE",
        "SENDGRID_ACCEPT",
        "MAILGUN_URL",
        "MAILGUN_API_KEY",
        "MAILGUN_METHOD",
        "MAILGUN_CONTENT_TYPE",
        "MAILGUN_ACCEPT",
    ];

    /// Runs `f` with only `vars` set among the provider keys.
    fn with_provider_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
        let env: Vec<(&str, Option<&str>)> = KEYS
            .iter()
            .map(|key| {
                let value = vars.iter().find(|(k, _)| k == key).map(|(_, v)| *v);
                (*key, value)
            })
            .collect();

        temp_env::with_vars(env, f)
    }

    #[test]
    fn test_sendgrid_defaults() {
        with_provider_env(&[("SENDGRID_API_KEY", "sg-key")], || {
            let config = ProviderConfig::from_env_for(ProviderKind::SendGrid).unwrap();

            assert_eq!(config.url, SENDGRID_DEFAULT_URL);
            assert_eq!(config.method, Method::POST);
            assert_eq!(config.api_key, "sg-key");
            assert_eq!(config.content_type, "application/json");
            assert_eq!(config.accept, "application/json");
        });
    }

    #[test]
    fn test_mailgun_requires_url() {
        with_provider_env(&[("MAILGUN_API_KEY", "mg-key")], || {
            let err = ProviderConfig::from_env_for(ProviderKind::Mailgun).unwrap_err();
            assert!(err.to_string().contains("MAILGUN_URL"));
        });
    }

    #[test]
    fn test_mailgun_from_env() {
        with_provider_env(
            &[
                ("MAILGUN_URL", "https://api.mailgun.net/v3/mg.example.com/messages"),
                ("MAILGUN_API_KEY", "mg-key"),
                ("MAILGUN_METHOD", "PUT"),
            ],
            || {
                let config = ProviderConfig::from_env_for(ProviderKind::Mailgun).unwrap();

                assert_eq!(config.method, Method::PUT);
                assert_eq!(config.content_type, "application/x-www-form-urlencoded");
            },
        );
    }

    #[test]
    fn test_missing_api_key() {
        with_provider_env(&[], || {
            let err = ProviderConfig::from_env_for(ProviderKind::SendGrid).unwrap_err();
            assert!(err.to_string().contains("SENDGRID_API_KEY"));
        });
    }

    #[test]
    fn test_invalid_method_names_key() {
        with_provider_env(
            &[
                ("SENDGRID_API_KEY", "sg-key"),
                ("SENDGRID_METHOD", "NOT A METHOD"),
            ],
            || {
                let err = ProviderConfig::from_env_for(ProviderKind::SendGrid).unwrap_err();
                assert!(err.to_string().contains("SENDGRID_METHOD"));
            },
        );
    }

    #[test]
    fn test_providers_config_loads_both() {
        with_provider_env(
            &[
                ("SENDGRID_API_KEY", "sg-key"),
                ("MAILGUN_URL", "https://api.mailgun.net/v3/mg.example.com/messages"),
                ("MAILGUN_API_KEY", "mg-key"),
            ],
            || {
                let config = ProvidersConfig::from_env().unwrap();

                assert_eq!(config.sendgrid.kind, ProviderKind::SendGrid);
                assert_eq!(config.mailgun.kind, ProviderKind::Mailgun);
                assert_eq!(config.mailgun.api_key, "mg-key");
            },
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ProviderConfig::new(ProviderKind::SendGrid, SENDGRID_DEFAULT_URL, "secret");
        let debug = format!("{:?}", config);

        assert!(!debug.contains("secret"));
        assert!(debug.contains("REDACTED"));
    }
}

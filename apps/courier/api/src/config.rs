use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use domain_emails::ProvidersConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub providers: ProvidersConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=7000
        let providers = ProvidersConfig::from_env()?; // API keys and the Mailgun URL are required

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            providers,
        })
    }
}

use crate::{ConfigError, FromEnv, env_or_default, parse_value};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the relay listens on when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 7000;

/// Listen address for HTTP APIs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self { host, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// `HOST` must be an IP address (default `0.0.0.0`), `PORT` a u16
    /// (default 7000). A bad value names its key in the error.
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let host = parse_value("HOST", &env_or_default("HOST", &defaults.host.to_string()))?;
        let port = parse_value("PORT", &env_or_default("PORT", &defaults.port.to_string()))?;

        Ok(Self { host, port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

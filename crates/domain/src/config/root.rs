use std::net::{IpAddr, SocketAddr};

use super::blocking::BlockingConfig;
use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

/// Main configuration structure for dohhole
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Listener configuration (address, port)
    pub server: ServerConfig,

    /// DoH upstream and bootstrap resolution
    pub upstream: UpstreamConfig,

    /// Denylist source and refresh policy
    pub blocking: BlockingConfig,

    /// Response cache maintenance
    pub cache: CacheConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Values sourced from the environment (or the equivalent flags).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub debug: bool,
}

impl Config {
    /// Defaults with environment overrides applied.
    pub fn load(overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_cli_overrides(overrides);
        Ok(config)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if overrides.debug {
            self.logging.debug = true;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::InvalidValue(
                "ADDR".to_string(),
                self.server.bind_address.clone(),
            ));
        }

        if self.upstream.doh_hostname.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream DoH hostname configured".to_string(),
            ));
        }

        if self.upstream.bootstrap_dns.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::InvalidValue(
                "bootstrap_dns".to_string(),
                self.upstream.bootstrap_dns.clone(),
            ));
        }

        if !self.blocking.hosts_url.starts_with("https://")
            && !self.blocking.hosts_url.starts_with("http://")
        {
            return Err(ConfigError::InvalidValue(
                "hosts_url".to_string(),
                self.blocking.hosts_url.clone(),
            ));
        }

        if self.blocking.refresh_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Denylist refresh interval cannot be 0".to_string(),
            ));
        }

        if self.blocking.fetch_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Denylist fetch timeout cannot be 0".to_string(),
            ));
        }

        if self.cache.reap_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Cache reap interval cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::spoof::SpoofConfig;
use crate::dns_record::MAX_UDP_PAYLOAD;
use crate::domain_name;

/// Main configuration structure for the responder
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listen address and port
    #[serde(default)]
    pub server: ServerConfig,

    /// Forging policy inputs
    #[serde(default)]
    pub spoof: SpoofConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. spoofmx.toml in current directory
    /// 3. /etc/spoofmx/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied last and the result is validated.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(domain) = overrides.forged_domain {
            self.spoof.forged_domain = domain;
        }
        if let Some(ip) = overrides.attacker_ip {
            self.spoof.attacker_ip = ip;
        }
        if let Some(mx) = overrides.attacker_mx {
            self.spoof.attacker_mx = mx;
        }
        if overrides.forge_a {
            self.spoof.forge_a = true;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.quiet {
            self.logging.quiet = true;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Bind address '{}' is not an IP address",
                self.server.bind_address
            )));
        }

        domain_name::validate(&self.spoof.forged_domain).map_err(|e| {
            ConfigError::Validation(format!("forged_domain: {}", e))
        })?;

        domain_name::validate(&self.spoof.attacker_mx)
            .map_err(|e| ConfigError::Validation(format!("attacker_mx: {}", e)))?;

        let reply_len = self
            .spoof
            .forged_reply_len()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        if reply_len > MAX_UDP_PAYLOAD {
            return Err(ConfigError::Validation(format!(
                "forged reply would be {} bytes, over the {}-byte UDP limit; shorten forged_domain or attacker_mx",
                reply_len, MAX_UDP_PAYLOAD
            )));
        }

        Ok(())
    }

    /// Address string suitable for `SocketAddr` parsing.
    pub fn listen_addr(&self) -> String {
        match self.server.bind_address.parse::<IpAddr>() {
            Ok(IpAddr::V6(v6)) => format!("[{}]:{}", v6, self.server.dns_port),
            _ => format!("{}:{}", self.server.bind_address, self.server.dns_port),
        }
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("spoofmx.toml").exists() {
            Some("spoofmx.toml".to_string())
        } else if std::path::Path::new("/etc/spoofmx/config.toml").exists() {
            Some("/etc/spoofmx/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub dns_port: Option<u16>,
    pub forged_domain: Option<String>,
    pub attacker_ip: Option<std::net::Ipv4Addr>,
    pub attacker_mx: Option<String>,
    pub forge_a: bool,
    pub log_level: Option<String>,
    pub quiet: bool,
}

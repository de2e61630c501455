use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::NsLookupConfig;
use super::scan::ScanConfig;
use super::transfer::TransferConfig;

const LOCAL_CONFIG_FILE: &str = "ferrous-axfr.toml";

/// Main configuration structure for Ferrous AXFR
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Zone transfer attempts (port, per-operation timeout)
    #[serde(default)]
    pub transfer: TransferConfig,

    /// NS discovery
    #[serde(default)]
    pub resolver: NsLookupConfig,

    /// Scan scheduling
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-axfr.toml in current directory
    /// 3. Default configuration
    ///
    /// Command-line overrides are applied last, then the result is validated.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_FILE).exists() {
            Self::from_file(LOCAL_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.transfer_port {
            self.transfer.port = port;
        }
        if let Some(timeout_ms) = overrides.transfer_timeout_ms {
            self.transfer.timeout_ms = timeout_ms;
        }
        if let Some(concurrency) = overrides.concurrency {
            self.scan.concurrency = concurrency;
        }
        if !overrides.nameservers.is_empty() {
            self.resolver.nameservers = overrides.nameservers;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.transfer.port == 0 {
            return Err(ConfigError::Validation(
                "Transfer port cannot be 0".to_string(),
            ));
        }
        if self.transfer.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Transfer timeout must be greater than 0".to_string(),
            ));
        }
        if self.transfer.max_duration_ms < self.transfer.timeout_ms {
            return Err(ConfigError::Validation(
                "Transfer max duration cannot be shorter than the transfer timeout".to_string(),
            ));
        }
        if self.resolver.port == 0 {
            return Err(ConfigError::Validation(
                "Resolver port cannot be 0".to_string(),
            ));
        }
        if self.resolver.timeout_ms == 0 || self.resolver.attempts == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout and attempts must be greater than 0".to_string(),
            ));
        }
        if self.scan.concurrency == 0 {
            return Err(ConfigError::Validation(
                "Scan concurrency must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub transfer_port: Option<u16>,
    pub transfer_timeout_ms: Option<u64>,
    pub concurrency: Option<usize>,
    pub nameservers: Vec<IpAddr>,
    pub log_level: Option<String>,
}

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;

/// Settings for the NS lookups that discover transfer targets.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NsLookupConfig {
    /// Servers to query instead of the system resolver configuration.
    #[serde(default)]
    pub nameservers: Vec<IpAddr>,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_attempts")]
    pub attempts: usize,
}

impl NsLookupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn uses_system_config(&self) -> bool {
        self.nameservers.is_empty()
    }
}

impl Default for NsLookupConfig {
    fn default() -> Self {
        Self {
            nameservers: Vec::new(),
            port: default_port(),
            timeout_ms: default_timeout_ms(),
            attempts: default_attempts(),
        }
    }
}

fn default_port() -> u16 {
    53
}

fn default_timeout_ms() -> u64 {
    5_000
}

fn default_attempts() -> usize {
    2
}

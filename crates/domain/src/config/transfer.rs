use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransferConfig {
    /// Port the AXFR targets are contacted on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Budget for each individual network operation of an attempt
    /// (address lookup, connect, send, every receive).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Ceiling for a whole attempt, however steadily the server keeps
    /// sending.
    #[serde(default = "default_max_duration_ms")]
    pub max_duration_ms: u64,
}

impl TransferConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn max_duration(&self) -> Duration {
        Duration::from_millis(self.max_duration_ms)
    }
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            timeout_ms: default_timeout_ms(),
            max_duration_ms: default_max_duration_ms(),
        }
    }
}

fn default_port() -> u16 {
    53
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_max_duration_ms() -> u64 {
    120_000
}

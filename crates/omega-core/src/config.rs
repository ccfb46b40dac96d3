//! Gateway YAML configuration.
//!
//! ```yaml
//! rpc_url: http://127.0.0.1:8545
//! factory_address: "0x5FbDB2315678afecb367f032d93F642f64180aa3"
//! poll_interval_ms: 1000
//! log:
//!   level: debug
//!   json: false
//! journal_path: ./omega-journal.jsonl
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Bare level ("info") or a full `EnvFilter` directive string.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of compact text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Settings for connecting gateways to a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// JSON-RPC endpoint of the node.
    pub rpc_url: String,
    /// Deployed factory contract, if known.
    #[serde(default)]
    pub factory_address: Option<Address>,
    /// Delay between receipt polls while awaiting confirmation.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default)]
    pub log: LogConfig,
    /// Optional JSONL transaction journal.
    #[serde(default)]
    pub journal_path: Option<PathBuf>,
}

impl GatewayConfig {
    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Receipt poll interval as a [`Duration`].
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rpc_url.trim().is_empty() {
            return Err(ConfigError::Invalid("rpc_url must not be empty".into()));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid("poll_interval_ms must be > 0".into()));
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_poll_interval_ms() -> u64 {
    1000
}

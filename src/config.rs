//! Configuration module for the prober

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main configuration structure for a probing run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Target host to probe, by domain name or IP literal
    pub target: String,

    /// Timeout for each connection attempt in milliseconds
    pub timeout: u64,

    /// Single port to probe
    pub port: Option<u16>,

    /// Comma-separated series of ports to probe, in input order
    pub series: Option<String>,

    /// Inclusive port range to probe, as "<min>-<max>"
    pub range: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            target: String::new(),
            timeout: 100,
            port: None,
            series: None,
            range: None,
        }
    }
}

impl ProbeConfig {
    /// Create a new configuration for the given target
    pub fn new(target: String) -> Self {
        Self {
            target,
            ..Default::default()
        }
    }

    /// Set the single port to probe
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the series of ports to probe
    pub fn with_series(mut self, series: String) -> Self {
        self.series = Some(series);
        self
    }

    /// Set the port range to probe
    pub fn with_range(mut self, range: String) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the timeout in milliseconds
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = fs::read_to_string(path)?;

        let config: ProbeConfig = toml::from_str(&content)
            .map_err(|e| crate::ProbeError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        Ok(config)
    }

    /// Load defaults from ~/.portprobe.toml if present
    pub fn load_default_config() -> Self {
        let home_dir = dirs::home_dir().unwrap_or_else(|| std::path::PathBuf::from("."));

        let defaults = home_dir.join(".portprobe.toml");

        if defaults.exists() {
            if let Ok(config) = Self::from_toml_file(&defaults) {
                log::info!("loaded config defaults from {}", defaults.display());
                return config;
            }
        }

        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.target.is_empty() {
            return Err(crate::ProbeError::InvalidTarget(
                "Target cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

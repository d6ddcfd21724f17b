//! Service Configuration
//! 
//! Read from the environment (after `.env` is loaded by the binary).

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration for the monitor service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Interface to bind (`ENVIRO_HOST`)
    pub host: String,
    /// TCP port (`ENVIRO_PORT`)
    pub port: u16,
    /// Fixed seed for simulated readings (`ENVIRO_SEED`); entropy when unset
    pub seed: Option<u64>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: None,
        }
    }
}

impl MonitorConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank keys keep their
    /// defaults; values that fail to parse are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(host) = get("ENVIRO_HOST") {
            config.host = host;
        }
        if let Some(port) = get("ENVIRO_PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("ENVIRO_PORT must be a port number, got '{}'", port))?;
        }
        if let Some(seed) = get("ENVIRO_SEED") {
            config.seed = Some(
                seed.parse()
                    .with_context(|| format!("ENVIRO_SEED must be an unsigned integer, got '{}'", seed))?,
            );
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

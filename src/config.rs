//! Client configuration.
//!
//! Values come from built-in defaults, then an optional YAML file, then
//! `RAWHTTP_*` environment variables. Later sources win.
//!
//! ```yaml
//! transport:
//!   connect_timeout_ms: 5000
//!   io_timeout_ms: 30000
//!   read_chunk_size: 4096
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Env var naming a YAML config file.
pub const CONFIG_PATH_ENV: &str = "RAWHTTP_CONFIG";
pub const CONNECT_TIMEOUT_ENV: &str = "RAWHTTP_CONNECT_TIMEOUT_MS";
pub const IO_TIMEOUT_ENV: &str = "RAWHTTP_IO_TIMEOUT_MS";
pub const READ_CHUNK_SIZE_ENV: &str = "RAWHTTP_READ_CHUNK_SIZE";

const DEFAULT_READ_CHUNK_SIZE: usize = 1024;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub transport: TransportConfig,
}

/// Socket tuning for [`crate::transport::TcpTransport`].
///
/// An unset timeout means that step blocks until the peer acts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransportConfig {
    pub connect_timeout_ms: Option<u64>,
    /// Bound on each individual read or write
    pub io_timeout_ms: Option<u64>,
    pub read_chunk_size: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: None,
            io_timeout_ms: None,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

impl TransportConfig {
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }

    pub fn io_timeout(&self) -> Option<Duration> {
        self.io_timeout_ms.map(Duration::from_millis)
    }
}

impl Config {
    /// Loads config from `path` (when given) and applies env overrides.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                Self::from_yaml(&raw)
                    .with_context(|| format!("invalid config file {}", path.display()))?
            }
            None => Self::default(),
        };

        cfg.apply_env()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Some(ms) = env_override(CONNECT_TIMEOUT_ENV)? {
            self.transport.connect_timeout_ms = Some(ms);
        }
        if let Some(ms) = env_override(IO_TIMEOUT_ENV)? {
            self.transport.io_timeout_ms = Some(ms);
        }
        if let Some(size) = env_override(READ_CHUNK_SIZE_ENV)? {
            self.transport.read_chunk_size = size;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.transport.read_chunk_size == 0 {
            anyhow::bail!("transport.read_chunk_size must be greater than zero");
        }
        Ok(())
    }
}

fn env_override<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("invalid value for {name}: {value:?}")),
        Err(_) => Ok(None),
    }
}

// src/config.rs

//! Manages client configuration: loading, defaulting, and validation.

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use strum_macros::{Display, EnumString};
use tracing::warn;

/// Which reader/writer/executor bindings are active for the process
/// lifetime. Selected at startup, not mutable at runtime.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Interactive,
    Batch,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    /// The execution front-end to run.
    #[serde(default)]
    pub mode: ExecutionMode,
    /// Directory saved recordings are written into.
    #[serde(default = "default_recordings_path")]
    pub recordings_path: PathBuf,
    /// Default tracing filter, overridable via `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Upper bound on any single remote operation.
    #[serde(default = "default_remote_timeout", with = "humantime_serde")]
    pub remote_timeout: Duration,
}

fn default_recordings_path() -> PathBuf {
    PathBuf::from("recordings")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_remote_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::default(),
            recordings_path: default_recordings_path(),
            log_level: default_log_level(),
            remote_timeout: default_remote_timeout(),
        }
    }
}

impl Config {
    /// Creates a new `Config` instance by reading and parsing a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at '{path}'"))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML from '{path}'"))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration for startup. An explicitly given path must exist;
    /// without one, the default file is used when present and built-in
    /// defaults otherwise.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                const DEFAULT_PATH: &str = "tracelink.toml";
                if fs::metadata(DEFAULT_PATH).is_ok() {
                    Self::from_file(DEFAULT_PATH)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validates the resolved configuration to ensure logical consistency.
    fn validate(&self) -> Result<()> {
        if self.recordings_path.as_os_str().is_empty() {
            return Err(anyhow!("recordings_path cannot be empty"));
        }
        if self.remote_timeout.is_zero() {
            return Err(anyhow!("remote_timeout cannot be 0"));
        }
        if self.remote_timeout < Duration::from_millis(100) {
            warn!(
                "low remote_timeout setting: {:?}. Remote operations may fail spuriously.",
                self.remote_timeout
            );
        }
        Ok(())
    }
}

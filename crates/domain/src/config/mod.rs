//! Configuration for the hushdns resolver.
//!
//! - `resolver`: endpoint list and cache sizing
//! - `logging`: log level consumed by whoever installs a subscriber

pub mod logging;
pub mod resolver;

pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Root configuration, loadable from a TOML file with `[resolver]` and
/// `[logging]` tables. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

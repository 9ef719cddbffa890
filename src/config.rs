//! Session configuration.
//!
//! Defaults match the deployed web client: the record lives under
//! `trackit_user_data` and conductor sessions last one day. A TOML file can
//! override either value:
//!
//! ```toml
//! storage_key = "trackit_user_data"
//! expiry_horizon_secs = 86400
//! ```

use crate::persistence::SHIFT_HORIZON_MS;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_STORAGE_KEY: &str = "trackit_user_data";

/// Longest horizon accepted from configuration: ten years.
const MAX_HORIZON_SECS: u64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Key the session record is stored under.
    pub storage_key: String,
    /// How long a conductor session stays valid.
    pub expiry_horizon_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            expiry_horizon_secs: (SHIFT_HORIZON_MS / 1000) as u64,
        }
    }
}

impl SessionConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".to_string()));
        }
        if self.expiry_horizon_secs == 0 || self.expiry_horizon_secs > MAX_HORIZON_SECS {
            return Err(ConfigError::Invalid(format!(
                "expiry_horizon_secs must be between 1 and {MAX_HORIZON_SECS}, got {}",
                self.expiry_horizon_secs
            )));
        }
        Ok(())
    }

    pub fn expiry_horizon(&self) -> Duration {
        let secs = self.expiry_horizon_secs.min(MAX_HORIZON_SECS) as i64;
        Duration::seconds(secs)
    }
}

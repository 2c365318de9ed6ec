//! Evaluation configuration
//!
//! Loaded from a JSON file. Every field is optional:
//!
//! ```json
//! { "value_ordering": "numeric", "max_join_tuples": 100000, "log_rejections": false }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::table::ValueOrdering;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings for compiling and running selections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// How column values compare
    #[serde(default)]
    pub value_ordering: ValueOrdering,

    /// Upper bound on the joined tuple count of one selection
    #[serde(default = "default_max_join_tuples")]
    pub max_join_tuples: u64,

    /// Emit a TRACE line for every tuple the `where` clause drops
    #[serde(default)]
    pub log_rejections: bool,
}

fn default_max_join_tuples() -> u64 {
    1_000_000
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            value_ordering: ValueOrdering::default(),
            max_join_tuples: default_max_join_tuples(),
            log_rejections: false,
        }
    }
}

impl FilterConfig {
    /// Load and validate configuration from `path`
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: FilterConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.max_join_tuples == 0 {
            return Err(ConfigError::Invalid("max_join_tuples must be > 0".into()));
        }
        Ok(())
    }
}

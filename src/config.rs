//! Policy configuration for parameters and adapters
//!
//! The defaults reproduce the behaviour hosts of the component model rely on:
//! validation status is sticky between `validate()` calls, numeric setters accept
//! out-of-bounds values, and delegate mutators that do not exist are silent
//! no-ops.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Policy switches carried by every parameter and adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterConfig {
    /// Reset the validation status to `NotValidated` whenever the value, the
    /// bounds or the options change, and on reset. Default: false
    pub invalidate_on_change: bool,

    /// Reject integer, real and array values that fail validation at set time,
    /// the way restricted option values are always rejected. Default: false
    pub reject_out_of_bounds: bool,

    /// Return `CapabilityUnavailable` from mutators the delegate of an adapter
    /// does not support, instead of succeeding without effect. Default: false
    pub strict_capabilities: bool,
}

impl ParameterConfig {
    /// The configuration with every stricter policy enabled
    pub fn strict() -> Self {
        Self {
            invalidate_on_change: true,
            reject_out_of_bounds: true,
            strict_capabilities: true,
        }
    }

    pub fn with_invalidate_on_change(mut self, enabled: bool) -> Self {
        self.invalidate_on_change = enabled;
        self
    }

    pub fn with_reject_out_of_bounds(mut self, enabled: bool) -> Self {
        self.reject_out_of_bounds = enabled;
        self
    }

    pub fn with_strict_capabilities(mut self, enabled: bool) -> Self {
        self.strict_capabilities = enabled;
        self
    }

    /// Parse a configuration from a JSON string
    ///
    /// Missing fields take their default value.
    ///
    /// # Examples
    ///
    /// ```
    /// use capeparam_rs::config::ParameterConfig;
    ///
    /// let config = ParameterConfig::from_json(r#"{"invalidate_on_change": true}"#).unwrap();
    /// assert!(config.invalidate_on_change);
    /// assert!(!config.reject_out_of_bounds);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Serialize the configuration to a pretty-printed JSON string
    pub fn to_json(&self) -> Result<String, ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}

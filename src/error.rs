use thiserror::Error;

use crate::config::ConfigError;
use crate::parameters::{ParameterError, ParseError};

/// Error types for the capeparam-rs library.
#[derive(Error, Debug)]
pub enum CapeParamError {
    /// Error raised by a parameter, an adapter or a collection.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// Error reading a value from text.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error loading a configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generic error for cases that don't fit the other categories.
    #[error("Error: {0}")]
    Other(String),
}

/// Result type for capeparam-rs operations.
pub type Result<T> = std::result::Result<T, CapeParamError>;

impl From<String> for CapeParamError {
    fn from(s: String) -> Self {
        CapeParamError::Other(s)
    }
}

impl From<&str> for CapeParamError {
    fn from(s: &str) -> Self {
        CapeParamError::Other(s.to_string())
    }
}

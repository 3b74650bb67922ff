//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating gateway configuration at startup.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// Config validation error (invalid values)
    #[error("Config validation error for {field}: {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// An upstream base URL could not be parsed
    #[error("Invalid URL for {field}: {message}")]
    InvalidUrl {
        /// Name of the field holding the URL
        field: String,
        /// Description of the parse failure
        message: String,
    },
}

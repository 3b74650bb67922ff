//! Startup error types for Release Gateway Core.
//!
//! Per-request failures use [`release_gateway_types::GatewayError`]; this type
//! covers building the gateway itself.

use release_gateway_types::ConfigError;
use thiserror::Error;

/// Error raised while constructing the outbound client or gateway state.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// The HTTP client could not be built (TLS backend, resolver setup).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration loading or validation failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for gateway construction.
pub type AppResult<T> = Result<T, AppError>;

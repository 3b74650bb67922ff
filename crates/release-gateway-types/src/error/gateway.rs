//! Request-handling errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while serving a proxied request.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum GatewayError {
    /// A required route parameter is missing or could not be bound
    #[error("{message}")]
    InvalidRequest { message: String },

    /// An upstream endpoint could not be turned into a request target
    #[error("Invalid upstream endpoint: {message}")]
    Configuration { message: String },

    /// The HEAD probe failed or did not yield a usable redirect
    #[error("{message}")]
    UpstreamProbe { message: String },

    /// Forwarding to the resolved target failed before a response arrived
    #[error("Upstream request failed: {message}")]
    ProxyStream { message: String },
}

impl GatewayError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest { message: message.into() }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    pub fn upstream_probe(message: impl Into<String>) -> Self {
        Self::UpstreamProbe { message: message.into() }
    }

    pub fn proxy_stream(message: impl Into<String>) -> Self {
        Self::ProxyStream { message: message.into() }
    }

    /// Check if this is a client error (4xx equivalent).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest { .. })
    }

    /// Get HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest { .. } => 400,
            Self::Configuration { .. } => 500,
            Self::UpstreamProbe { .. } | Self::ProxyStream { .. } => 502,
        }
    }
}

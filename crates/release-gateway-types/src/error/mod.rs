//! Typed error definitions for Release Gateway.
//!
//! Errors are serializable (for JSON error bodies and logs), displayable, and
//! carry the HTTP status they translate to at the handler boundary.

mod config;
mod gateway;

pub use config::ConfigError;
pub use gateway::GatewayError;
